//! Go test skeleton rendering.
//!
//! A generated file is one shared header followed by one
//! `func Test<Name>(t *testing.T)` block per exported function, separated
//! by blank lines. Every line ends with `\n`.

use lc_config::{GentestConfig, TemplateStyle};
use lc_parser::{Parameter, Signature, SourceFile, TypeExpr, type_to_string};

/// Settings that shape the generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub style: TemplateStyle,
    /// Package clause of the test file.
    pub test_package: String,
    /// Import path of the package under test.
    pub import_path: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&GentestConfig::default())
    }
}

impl From<&GentestConfig> for RenderOptions {
    fn from(config: &GentestConfig) -> Self {
        Self {
            style: config.style,
            test_package: config.test_package.clone(),
            import_path: config.import_path.clone(),
        }
    }
}

/// The header shared by every generated file: package clause and imports.
#[must_use]
pub fn render_header(options: &RenderOptions) -> String {
    format!(
        "package {}\n\nimport (\n\t\"reflect\"\n\t\"testing\"\n\n\t\"{}\"\n)\n",
        options.test_package, options.import_path
    )
}

/// Render the full test file for a parsed source file.
///
/// Only exported functions get a test, in declaration order. A file with
/// none yields just the header. When no skeleton compares results the
/// `reflect` import is kept alive with a blank assignment.
#[must_use]
pub fn generate_test_file(file: &SourceFile, options: &RenderOptions) -> String {
    let skeletons: Vec<String> = file
        .exported_functions()
        .map(|decl| {
            let signature = decl.signature.clone().unwrap_or_default();
            render_skeleton(&decl.name, &signature, &file.package, options.style)
        })
        .collect();

    let mut out = render_header(options);
    if !skeletons.is_empty() && !skeletons.iter().any(|s| s.contains("reflect.")) {
        out.push_str("\nvar _ = reflect.DeepEqual\n");
    }
    for skeleton in &skeletons {
        out.push('\n');
        out.push_str(skeleton);
    }
    out
}

/// Render one test function for `name`, calling it as `<package>.<name>`.
#[must_use]
pub fn render_skeleton(
    name: &str,
    signature: &Signature,
    package: &str,
    style: TemplateStyle,
) -> String {
    match style {
        TemplateStyle::Typed => render_typed(name, signature, package),
        TemplateStyle::Variadic => render_variadic(name, signature, package),
    }
}

/// `Name(a int, b int) int` or `Name(s string) (int, error)`.
#[must_use]
pub fn describe_signature(name: &str, signature: &Signature) -> String {
    let params = signature
        .params
        .iter()
        .map(|p| {
            let dots = if p.variadic { "..." } else { "" };
            format!("{} {dots}{}", p.name, type_to_string(&p.ty))
        })
        .collect::<Vec<_>>()
        .join(", ");
    let results = match signature.results.as_slice() {
        [] => String::new(),
        [single] => format!(" {single}"),
        many => format!(
            " ({})",
            many.iter().map(type_to_string).collect::<Vec<_>>().join(", ")
        ),
    };
    format!("{name}({params}){results}")
}

// ── typed ─────────────────────────────────────────────────────────

struct Field {
    name: String,
    ty: String,
}

fn unique(base: &str, taken: &[String]) -> String {
    let mut name = base.to_string();
    while taken.contains(&name) {
        name.push('_');
    }
    name
}

fn input_fields(params: &[Parameter]) -> Vec<Field> {
    let mut fields: Vec<Field> = Vec::with_capacity(params.len());
    for (index, param) in params.iter().enumerate() {
        // `_` cannot be read back out of the struct.
        let base = if param.name == "_" {
            format!("arg{index}")
        } else {
            param.name.clone()
        };
        let taken: Vec<String> = fields.iter().map(|f| f.name.clone()).collect();
        fields.push(Field {
            name: unique(&base, &taken),
            ty: type_to_string(&param.field_type()),
        });
    }
    fields
}

fn want_fields(results: &[TypeExpr], inputs: &[Field]) -> Vec<Field> {
    let mut taken: Vec<String> = inputs.iter().map(|f| f.name.clone()).collect();
    let mut fields = Vec::with_capacity(results.len());
    for (index, ty) in results.iter().enumerate() {
        let base = if index == 0 {
            "want".to_string()
        } else {
            format!("want{index}")
        };
        let name = unique(&base, &taken);
        taken.push(name.clone());
        fields.push(Field {
            name,
            ty: type_to_string(ty),
        });
    }
    fields
}

fn got_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|index| {
            if index == 0 {
                "got".to_string()
            } else {
                format!("got{index}")
            }
        })
        .collect()
}

fn render_struct_fields(fields: &[&Field]) -> String {
    let width = fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
    fields
        .iter()
        .map(|f| format!("\t\t{:<width$} {}\n", f.name, f.ty))
        .collect()
}

fn render_typed(name: &str, signature: &Signature, package: &str) -> String {
    let inputs = input_fields(&signature.params);
    let wants = want_fields(&signature.results, &inputs);
    let gots = got_names(wants.len());

    let all_fields: Vec<&Field> = inputs.iter().chain(wants.iter()).collect();
    let struct_body = if all_fields.is_empty() {
        "\ttestCases := []struct{}{}\n".to_string()
    } else {
        format!(
            "\ttestCases := []struct {{\n{}\t}}{{}}\n",
            render_struct_fields(&all_fields)
        )
    };

    let args = inputs
        .iter()
        .zip(&signature.params)
        .map(|(field, param)| {
            let spread = if param.variadic { "..." } else { "" };
            format!("tc.{}{spread}", field.name)
        })
        .collect::<Vec<_>>()
        .join(", ");
    let call = format!("{package}.{name}({args})");

    let mut body = String::new();
    body.push_str(&format!("func Test{name}(t *testing.T) {{\n"));
    body.push_str(&format!("\t// {}\n", describe_signature(name, signature)));
    body.push_str("\t// Fill in the test cases below.\n");
    body.push_str(&struct_body);
    body.push('\n');
    // A loop variable nothing reads is a compile error in Go.
    if inputs.is_empty() && wants.is_empty() {
        body.push_str("\tfor range testCases {\n");
    } else {
        body.push_str("\tfor _, tc := range testCases {\n");
    }

    if wants.is_empty() {
        body.push_str(&format!("\t\t{call}\n"));
        body.push_str("\t\t// No return values: assert on the inputs after the call.\n");
    } else {
        body.push_str(&format!("\t\t{} := {call}\n", gots.join(", ")));
        let condition = gots
            .iter()
            .zip(&wants)
            .map(|(got, want)| format!("!reflect.DeepEqual({got}, tc.{})", want.name))
            .collect::<Vec<_>>()
            .join(" || ");
        let verbs = |n: usize| vec!["%v"; n].join(", ");
        let format_str = format!(
            "{name}({}) = {}, want {}",
            verbs(inputs.len()),
            verbs(gots.len()),
            verbs(wants.len())
        );
        let error_args = inputs
            .iter()
            .map(|f| format!("tc.{}", f.name))
            .chain(gots.iter().cloned())
            .chain(wants.iter().map(|f| format!("tc.{}", f.name)))
            .collect::<Vec<_>>()
            .join(", ");
        body.push_str(&format!("\t\tif {condition} {{\n"));
        body.push_str(&format!("\t\t\tt.Errorf(\"{format_str}\", {error_args})\n"));
        body.push_str("\t\t}\n");
    }

    body.push_str("\t}\n");
    body.push_str("}\n");
    body
}

// ── variadic ──────────────────────────────────────────────────────

fn render_variadic(name: &str, signature: &Signature, package: &str) -> String {
    let mut body = String::new();
    body.push_str(&format!("func Test{name}(t *testing.T) {{\n"));
    body.push_str(&format!("\t// {}\n", describe_signature(name, signature)));
    body.push_str("\t// Fill in the test cases below.\n");
    body.push_str("\tvar testCases []struct {\n");
    body.push_str("\t\tinputs []interface{} // adjust to the parameter types\n");
    body.push_str("\t\twant   interface{}   // adjust to the result type\n");
    body.push_str("\t}\n");
    body.push('\n');
    body.push_str("\tfor _, tc := range testCases {\n");
    body.push_str(&format!(
        "\t\tgot := {package}.{name}(tc.inputs...) // only compiles for variadic ...interface{{}} functions\n"
    ));
    body.push_str("\t\tif !reflect.DeepEqual(got, tc.want) {\n");
    body.push_str(
        "\t\t\tt.Errorf(\"For inputs %v, got %v, want %v\", tc.inputs, got, tc.want)\n",
    );
    body.push_str("\t\t}\n");
    body.push_str("\t}\n");
    body.push_str("}\n");
    body
}
