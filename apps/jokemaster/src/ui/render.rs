use joke_table::JokeTable;
use session_core::{DisplayView, JokeDisplay};
use shared::{domain::LanguageCatalog, protocol::GenerationCompleted};

pub fn render_view(view: &DisplayView) -> String {
    let mut out = String::new();

    match &view.joke {
        JokeDisplay::Placeholder { prompt } => {
            out.push_str(prompt);
            out.push('\n');
        }
        JokeDisplay::Joke {
            quoted_text,
            category,
            language_name,
        } => {
            out.push_str(&format!("[{category}] · {language_name}\n"));
            out.push_str(quoted_text);
            out.push('\n');
        }
    }

    if view.generation_count > 0 {
        out.push_str(&format!(
            "jokes: {} · smiles created: {}\n",
            view.generation_count, view.smiles_created
        ));
    }

    if view.trigger.busy {
        out.push_str(&format!("( {} )", view.trigger.label));
    } else {
        out.push_str(&format!("[ {} ]", view.trigger.label));
    }
    out
}

pub fn render_toast(done: &GenerationCompleted) -> String {
    format!("* {} {}", done.title(), done.description())
}

/// One line per offered language; codes without their own jokes are marked.
pub fn render_languages(catalog: &LanguageCatalog, table: &JokeTable) -> String {
    catalog
        .iter()
        .map(|language| {
            let mut line = format!(
                "{} {:<4} {}",
                language.icon, language.code, language.display_name
            );
            if !table.contains(language.code.as_str()) {
                line.push_str(&format!(" (uses {} jokes)", table.fallback()));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
