pub mod add;
pub mod dispatch;
pub mod gentest;
pub mod history;
pub mod shared;

#[cfg(test)]
pub mod testing;
