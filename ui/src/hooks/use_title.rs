use yew::prelude::*;

const SITE_NAME: &str = "Spark";

pub fn page_title(title: &str) -> String {
    if title.is_empty() {
        SITE_NAME.to_string()
    } else {
        format!("{title} | {SITE_NAME}")
    }
}

/// Sets the document title to `<title> | Spark`.
#[hook]
pub fn use_title(title: &str) {
    let title = page_title(title);
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_carry_the_site_name() {
        assert_eq!(page_title("Pricing"), "Pricing | Spark");
        assert_eq!(page_title(""), "Spark");
    }
}
