//! Rendered feedback markup

/// Blocking alert shown when submission validation fails.
pub const VALIDATION_ALERT: &str =
    "Por favor, preencha todos os campos obrigatórios e corrija os erros de formato.";

/// Success feedback rendered into the form container after a valid
/// submission.
pub fn success_feedback(name: &str) -> String {
    let name = escape_html(name);
    format!(
        r#"<div class="alert alert-success">
    <h3>🎉 Cadastro Concluído com Sucesso!</h3>
    <p>Obrigado, {name}! Seu interesse em ser voluntário na ONG Patas Amigas foi registrado.</p>
    <p>Entraremos em contato em breve através do seu e-mail para os próximos passos.</p>
</div>"#
    )
}

/// Inline error rendered into the mount region when a fragment fails to
/// load, naming the attempted fragment.
pub fn load_error(fragment: &str) -> String {
    format!(
        r#"<p class="alert-error">Erro ao carregar conteúdo. ({})</p>"#,
        escape_html(fragment)
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_feedback_contains_name() {
        let html = success_feedback("Ana Souza");
        assert!(html.contains("Obrigado, Ana Souza!"));
        assert!(html.contains("alert-success"));
    }

    #[test]
    fn test_feedback_escapes_markup() {
        let html = success_feedback("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_load_error_names_fragment() {
        let html = load_error("register.html");
        assert!(html.contains("(register.html)"));
        assert!(html.contains("alert-error"));
    }
}
