//! Registration form model
//!
//! The form is parsed out of mounted markup as a flat list of field groups,
//! each holding at most one labeled input or select. Validation marks groups
//! errored; submission collects every named field into a record.

use scraper::{Html, Selector};

/// One input or select inside a field group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Stable element id, e.g. `document-number`
    pub id: String,
    /// Submission name; unnamed fields are not collected
    pub name: String,
    pub value: String,
    pub required: bool,
    pub is_select: bool,
}

#[derive(Debug, Clone)]
pub struct FieldGroup {
    pub field: Option<Field>,
    pub errored: bool,
}

#[derive(Debug, Clone)]
pub struct Form {
    groups: Vec<FieldGroup>,
}

impl Form {
    /// Parse the first form inside a form container out of a chunk of markup.
    /// Returns `None` when the markup has no form.
    pub fn from_html(html: &str) -> Option<Form> {
        let doc = Html::parse_fragment(html);
        let form_sel = Selector::parse(".form-container form").ok()?;
        let group_sel = Selector::parse(".form-group").ok()?;
        let input_sel = Selector::parse(".form-input, .form-select").ok()?;

        let form_el = doc.select(&form_sel).next()?;

        let mut groups = Vec::new();
        for group_el in form_el.select(&group_sel) {
            let field = group_el.select(&input_sel).next().map(|el| {
                let v = el.value();
                Field {
                    id: v.attr("id").unwrap_or_default().to_string(),
                    name: v.attr("name").unwrap_or_default().to_string(),
                    value: v.attr("value").unwrap_or_default().to_string(),
                    required: v.attr("required").is_some(),
                    is_select: el.value().name() == "select",
                }
            });

            groups.push(FieldGroup {
                field,
                errored: false,
            });
        }

        Some(Form { groups })
    }

    pub fn groups(&self) -> &[FieldGroup] {
        &self.groups
    }

    pub fn groups_mut(&mut self) -> &mut [FieldGroup] {
        &mut self.groups
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.groups
            .iter()
            .filter_map(|g| g.field.as_ref())
            .find(|f| f.id == id)
    }

    pub fn field_mut(&mut self, id: &str) -> Option<&mut Field> {
        self.groups
            .iter_mut()
            .filter_map(|g| g.field.as_mut())
            .find(|f| f.id == id)
    }

    /// Set a field's value, e.g. from user input. Unknown ids are ignored.
    pub fn set_value(&mut self, id: &str, value: &str) {
        if let Some(field) = self.field_mut(id) {
            field.value = value.to_string();
        }
    }

    /// Clear error marks from every group.
    pub fn clear_errors(&mut self) {
        for group in &mut self.groups {
            group.errored = false;
        }
    }

    /// Ids of currently errored groups' fields.
    pub fn errored_field_ids(&self) -> Vec<String> {
        self.groups
            .iter()
            .filter(|g| g.errored)
            .filter_map(|g| g.field.as_ref().map(|f| f.id.clone()))
            .collect()
    }

    /// Collect every named field into (name, value) pairs, in group order.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.groups
            .iter()
            .filter_map(|g| g.field.as_ref())
            .filter(|f| !f.name.is_empty())
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORM_HTML: &str = r#"
        <div class="form-container"><form>
          <div class="form-group">
            <label for="name">Nome</label>
            <input class="form-input" id="name" name="name" required>
          </div>
          <div class="form-group">
            <label for="document-number">CPF</label>
            <input class="form-input" id="document-number" name="document-number">
          </div>
          <div class="form-group">
            <label for="availability">Disponibilidade</label>
            <select class="form-select" id="availability" name="availability" required></select>
          </div>
          <div class="form-group"><button type="submit">Enviar</button></div>
        </form></div>
    "#;

    #[test]
    fn test_parse_groups() {
        let form = Form::from_html(FORM_HTML).unwrap();
        assert_eq!(form.groups().len(), 4);

        let name = form.field("name").unwrap();
        assert!(name.required);
        assert!(!name.is_select);

        let doc = form.field("document-number").unwrap();
        assert!(!doc.required);

        let availability = form.field("availability").unwrap();
        assert!(availability.is_select);

        // The button group has no input
        assert!(form.groups()[3].field.is_none());
    }

    #[test]
    fn test_no_form() {
        assert!(Form::from_html("<p>conteúdo sem formulário</p>").is_none());
    }

    #[test]
    fn test_set_value_and_entries() {
        let mut form = Form::from_html(FORM_HTML).unwrap();
        form.set_value("name", "Ana Souza");
        form.set_value("availability", "weekends");
        form.set_value("missing-id", "ignored");

        let entries = form.entries();
        assert_eq!(
            entries,
            vec![
                ("name".to_string(), "Ana Souza".to_string()),
                ("document-number".to_string(), String::new()),
                ("availability".to_string(), "weekends".to_string()),
            ]
        );
    }

    #[test]
    fn test_error_marks() {
        let mut form = Form::from_html(FORM_HTML).unwrap();
        form.groups_mut()[0].errored = true;
        assert_eq!(form.errored_field_ids(), vec!["name".to_string()]);

        form.clear_errors();
        assert!(form.errored_field_ids().is_empty());
    }
}
