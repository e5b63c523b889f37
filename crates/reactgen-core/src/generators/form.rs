//! Form component generator (react-hook-form or Formik, optional yup schema)

use crate::artifact::{rel_path, Artifact};
use crate::request::{FieldKind, FormLibrary, FormRequest};
use crate::template::{indent, lines, Template};

pub fn generate(req: &FormRequest) -> Vec<Artifact> {
    let path = rel_path(["src", req.path.as_str()])
        .join(format!("{}.{}", req.name, req.file_kind.extension()));
    vec![Artifact::source(path, render(req))]
}

fn data_type(req: &FormRequest) -> Option<String> {
    req.file_kind
        .is_typed()
        .then(|| format!("{}Data", req.name))
}

fn render_imports(req: &FormRequest) -> String {
    let mut imports = vec!["import React from 'react';"];
    match req.library {
        FormLibrary::ReactHookForm => {
            imports.push("import { useForm } from 'react-hook-form';");
            if req.validation {
                imports.push("import { yupResolver } from '@hookform/resolvers/yup';");
            }
        }
        FormLibrary::Formik => imports.push("import { Formik, Form, Field } from 'formik';"),
    }
    if req.validation {
        imports.push("import * as yup from 'yup';");
    }
    lines(imports)
}

fn render_interface(req: &FormRequest, data_type: &str) -> String {
    let mut out = vec![format!("interface {data_type} {{")];
    out.extend(
        req.fields
            .iter()
            .map(|f| format!("  {}: {};", f.name(), f.ts_type())),
    );
    out.push("}".to_string());
    lines(out)
}

fn schema_rule(field: FieldKind) -> String {
    match field {
        FieldKind::Email => {
            "yup.string().email('Invalid email').required('Email is required')".to_string()
        }
        FieldKind::Password => "yup.string().min(6, 'Password must be at least 6 characters').required('Password is required')".to_string(),
        FieldKind::Number => {
            "yup.number().typeError('Number is required').required('Number is required')"
                .to_string()
        }
        FieldKind::Checkbox => "yup.boolean().oneOf([true], 'Checkbox is required')".to_string(),
        other => format!("yup.string().required('{} is required')", other.title()),
    }
}

fn render_schema(req: &FormRequest) -> String {
    let mut out = vec!["const validationSchema = yup.object({".to_string()];
    out.extend(
        req.fields
            .iter()
            .map(|f| format!("  {}: {},", f.name(), schema_rule(*f))),
    );
    out.push("});".to_string());
    lines(out)
}

/// Initial Formik value literal for a field
fn initial_value(field: FieldKind) -> &'static str {
    match field {
        FieldKind::Number => "0",
        FieldKind::Checkbox => "false",
        _ => "''",
    }
}

/// Markup for one react-hook-form field, wrapped in a `<div>`
fn hook_form_field(field: FieldKind) -> String {
    let name = field.name();
    let title = field.title();
    let control = match field {
        FieldKind::Select => lines([
            format!("<select id=\"{name}\" {{...register(\"{name}\")}}>"),
            "  <option value=\"\">Select an option</option>".to_string(),
            "  <option value=\"option1\">Option 1</option>".to_string(),
            "  <option value=\"option2\">Option 2</option>".to_string(),
            "</select>".to_string(),
        ]),
        FieldKind::Textarea => format!("<textarea id=\"{name}\" {{...register(\"{name}\")}} />"),
        FieldKind::Radio => lines([
            "<label>".to_string(),
            format!("  <input id=\"{name}1\" type=\"radio\" value=\"option1\" {{...register(\"{name}\")}} /> Option 1"),
            "</label>".to_string(),
            "<label>".to_string(),
            format!("  <input id=\"{name}2\" type=\"radio\" value=\"option2\" {{...register(\"{name}\")}} /> Option 2"),
            "</label>".to_string(),
        ]),
        _ => format!("<input id=\"{name}\" type=\"{name}\" {{...register(\"{name}\")}} />"),
    };
    // Radio groups have no element with the bare field id
    let label_for = match field {
        FieldKind::Radio => format!("{name}1"),
        _ => name.to_string(),
    };

    lines([
        "<div>".to_string(),
        format!("  <label htmlFor=\"{label_for}\">{title}</label>"),
        indent(&control, 2),
        format!("  {{errors.{name} && <span>{{errors.{name}.message}}</span>}}"),
        "</div>".to_string(),
    ])
}

/// Markup for one Formik field
fn formik_field(field: FieldKind) -> String {
    let name = field.name();
    let title = field.title();
    match field {
        FieldKind::Select => lines([
            format!("<Field as=\"select\" name=\"{name}\">"),
            "  <option value=\"\">Select an option</option>".to_string(),
            "  <option value=\"option1\">Option 1</option>".to_string(),
            "  <option value=\"option2\">Option 2</option>".to_string(),
            "</Field>".to_string(),
        ]),
        FieldKind::Textarea => {
            format!("<Field as=\"textarea\" name=\"{name}\" placeholder=\"{title}\" />")
        }
        FieldKind::Radio => lines([
            format!("<label><Field type=\"radio\" name=\"{name}\" value=\"option1\" /> Option 1</label>"),
            format!("<label><Field type=\"radio\" name=\"{name}\" value=\"option2\" /> Option 2</label>"),
        ]),
        FieldKind::Checkbox => {
            format!("<label><Field type=\"checkbox\" name=\"{name}\" /> {title}</label>")
        }
        _ => format!("<Field type=\"{name}\" name=\"{name}\" placeholder=\"{title}\" />"),
    }
}

fn render_hook_form_body(req: &FormRequest, data_type: Option<&str>) -> Template {
    let generic = data_type.map(|t| format!("<{t}>")).unwrap_or_default();
    let options = if req.validation {
        "{ resolver: yupResolver(validationSchema) }"
    } else {
        ""
    };
    let param = data_type
        .map(|t| format!("data: {t}"))
        .unwrap_or_else(|| "data".to_string());

    let fields = lines(req.fields.iter().map(|f| hook_form_field(*f)));

    Template::new()
        .section(
            "form_state",
            format!(
                "const {{ register, handleSubmit, formState: {{ errors }} }} = useForm{generic}({options});"
            ),
        )
        .section(
            "submit",
            lines([
                format!("const onSubmit = ({param}) => {{"),
                "  console.log(data);".to_string(),
                "};".to_string(),
            ]),
        )
        .section(
            "render",
            lines([
                "return (".to_string(),
                "  <form onSubmit={handleSubmit(onSubmit)}>".to_string(),
                indent(&fields, 4),
                "    <button type=\"submit\">Submit</button>".to_string(),
                "  </form>".to_string(),
                ");".to_string(),
            ]),
        )
}

fn render_formik_body(req: &FormRequest, data_type: Option<&str>) -> Template {
    let annotation = data_type.map(|t| format!(": {t}")).unwrap_or_default();

    let mut initial = vec![format!("const initialValues{annotation} = {{")];
    initial.extend(
        req.fields
            .iter()
            .map(|f| format!("  {}: {},", f.name(), initial_value(*f))),
    );
    initial.push("};".to_string());

    let mut formik = vec![
        "<Formik".to_string(),
        "  initialValues={initialValues}".to_string(),
    ];
    if req.validation {
        formik.push("  validationSchema={validationSchema}".to_string());
    }
    formik.push("  onSubmit={onSubmit}".to_string());
    formik.push(">".to_string());

    let fields = lines(req.fields.iter().map(|f| formik_field(*f)));

    Template::new()
        .section("initial_values", lines(initial))
        .section(
            "submit",
            lines([
                format!("const onSubmit = (values{annotation}) => {{"),
                "  console.log(values);".to_string(),
                "};".to_string(),
            ]),
        )
        .section(
            "render",
            lines([
                "return (".to_string(),
                indent(&lines(formik), 2),
                "    <Form>".to_string(),
                indent(&fields, 6),
                "      <button type=\"submit\">Submit</button>".to_string(),
                "    </Form>".to_string(),
                "  </Formik>".to_string(),
                ");".to_string(),
            ]),
        )
}

fn render(req: &FormRequest) -> String {
    let name = &req.name;
    let data_type = data_type(req);

    let body = match req.library {
        FormLibrary::ReactHookForm => render_hook_form_body(req, data_type.as_deref()),
        FormLibrary::Formik => render_formik_body(req, data_type.as_deref()),
    };

    Template::new()
        .section("imports", render_imports(req))
        .section_if(data_type.is_some(), "types", || {
            render_interface(req, data_type.as_deref().unwrap_or_default())
        })
        .section_if(req.validation, "schema", || render_schema(req))
        .section(
            "component",
            format!(
                "const {name} = () => {{\n{}}};",
                body.render_indented(2)
            ),
        )
        .section("export", format!("export default {name};"))
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::FileKind;
    use std::path::PathBuf;

    fn request(library: FormLibrary, validation: bool, fields: &[FieldKind]) -> FormRequest {
        FormRequest {
            name: "Signup".to_string(),
            path: "components".to_string(),
            file_kind: FileKind::Tsx,
            library,
            validation,
            fields: fields.iter().copied().collect(),
        }
    }

    #[test]
    fn test_form_path_has_no_subdirectory() {
        let artifacts = generate(&request(FormLibrary::Formik, false, &[FieldKind::Text]));
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].path, PathBuf::from("src/components/Signup.tsx"));
    }

    #[test]
    fn test_hook_form_with_validation() {
        let req = request(
            FormLibrary::ReactHookForm,
            true,
            &[FieldKind::Email, FieldKind::Password],
        );
        let content = &generate(&req)[0].content;

        assert!(content.contains("import { useForm } from 'react-hook-form';"));
        assert!(content.contains("import { yupResolver } from '@hookform/resolvers/yup';"));
        assert!(content.contains("import * as yup from 'yup';"));
        assert!(content.contains("interface SignupData {\n  email: string;\n  password: string;\n}"));
        assert!(content.contains(
            "email: yup.string().email('Invalid email').required('Email is required'),"
        ));
        assert!(content.contains(".min(6, 'Password must be at least 6 characters')"));
        assert!(content.contains(
            "useForm<SignupData>({ resolver: yupResolver(validationSchema) });"
        ));
        assert!(content.contains("const onSubmit = (data: SignupData) => {"));
        assert!(content.contains("{errors.email && <span>{errors.email.message}</span>}"));
        assert!(content.ends_with("export default Signup;\n"));
    }

    #[test]
    fn test_hook_form_without_validation_has_no_yup() {
        let mut req = request(FormLibrary::ReactHookForm, false, &[FieldKind::Text]);
        req.file_kind = FileKind::Jsx;
        let content = &generate(&req)[0].content;

        assert!(!content.contains("yup"));
        assert!(!content.contains("interface"));
        assert!(content.contains("formState: { errors } } = useForm();"));
        assert!(content.contains("const onSubmit = (data) => {"));
    }

    #[test]
    fn test_formik_initial_values_by_field_kind() {
        let req = request(
            FormLibrary::Formik,
            false,
            &[FieldKind::Checkbox, FieldKind::Number, FieldKind::Text],
        );
        let content = &generate(&req)[0].content;

        assert!(content.contains("import { Formik, Form, Field } from 'formik';"));
        assert!(content.contains(
            "const initialValues: SignupData = {\n    text: '',\n    number: 0,\n    checkbox: false,\n  };"
        ));
        assert!(!content.contains("validationSchema"));
        assert!(content.contains("  number: number;"));
        assert!(content.contains("  checkbox: boolean;"));
    }

    #[test]
    fn test_formik_with_validation_passes_schema() {
        let req = request(FormLibrary::Formik, true, &[FieldKind::Number, FieldKind::Checkbox]);
        let content = &generate(&req)[0].content;

        assert!(!content.contains("yupResolver"));
        assert!(content.contains("      validationSchema={validationSchema}"));
        assert!(content.contains(
            "number: yup.number().typeError('Number is required').required('Number is required'),"
        ));
        assert!(content.contains("checkbox: yup.boolean().oneOf([true], 'Checkbox is required'),"));
    }

    #[test]
    fn test_schema_message_uses_title() {
        let req = request(FormLibrary::Formik, true, &[FieldKind::Textarea]);
        let content = &generate(&req)[0].content;
        assert!(content.contains("textarea: yup.string().required('Textarea is required'),"));
    }

    #[test]
    fn test_radio_renders_two_options_for_both_libraries() {
        for library in [FormLibrary::ReactHookForm, FormLibrary::Formik] {
            let content = &generate(&request(library, false, &[FieldKind::Radio]))[0].content;
            assert!(content.contains("value=\"option1\""), "{content}");
            assert!(content.contains("value=\"option2\""), "{content}");
        }
        let hook_form =
            &generate(&request(FormLibrary::ReactHookForm, false, &[FieldKind::Radio]))[0].content;
        assert_eq!(hook_form.matches("{...register(\"radio\")}").count(), 2);
        assert!(hook_form.contains("<label htmlFor=\"radio1\">Radio</label>"));
        assert!(!hook_form.contains("htmlFor=\"radio\""));
    }

    #[test]
    fn test_select_has_placeholder_option() {
        for library in [FormLibrary::ReactHookForm, FormLibrary::Formik] {
            let content = &generate(&request(library, false, &[FieldKind::Select]))[0].content;
            assert!(content.contains("<option value=\"\">Select an option</option>"));
            assert!(content.contains("<option value=\"option2\">Option 2</option>"));
        }
    }

    #[test]
    fn test_fields_follow_canonical_order() {
        let req = request(
            FormLibrary::ReactHookForm,
            false,
            &[FieldKind::Textarea, FieldKind::Text, FieldKind::Email],
        );
        let content = &generate(&req)[0].content;
        let text = content.find("htmlFor=\"text\"").unwrap();
        let email = content.find("htmlFor=\"email\"").unwrap();
        let textarea = content.find("htmlFor=\"textarea\"").unwrap();
        assert!(text < email && email < textarea);
    }

    #[test]
    fn test_formik_form_markup() {
        let mut req = request(FormLibrary::Formik, false, &[FieldKind::Email]);
        req.file_kind = FileKind::Jsx;
        let expected = "\
import React from 'react';
import { Formik, Form, Field } from 'formik';

const Signup = () => {
  const initialValues = {
    email: '',
  };

  const onSubmit = (values) => {
    console.log(values);
  };

  return (
    <Formik
      initialValues={initialValues}
      onSubmit={onSubmit}
    >
      <Form>
        <Field type=\"email\" name=\"email\" placeholder=\"Email\" />
        <button type=\"submit\">Submit</button>
      </Form>
    </Formik>
  );
};

export default Signup;
";
        assert_eq!(generate(&req)[0].content, expected);
    }
}
