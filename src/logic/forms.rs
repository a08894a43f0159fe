/// Escape HTML-significant characters. Applied once to every submitted value
/// before validation and persistence, so stored text is render-safe as-is.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// A decoded form body. Keys may repeat (checkbox groups submit one pair per
/// checked box); values are trimmed and escaped at construction so the rest
/// of the workflow never sees raw input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let pairs = pairs
            .into_iter()
            .map(|(key, value)| (key, escape_html(value.trim())))
            .collect();
        Self { pairs }
    }

    /// First value submitted under `key`, or empty when absent.
    pub fn value(&self, key: &str) -> &str {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// Every non-empty value submitted under `key`, duplicates dropped,
    /// submission order kept. A single submission yields a one-element list.
    pub fn values(&self, key: &str) -> Vec<String> {
        let mut seen = Vec::new();
        for (k, v) in &self.pairs {
            if k == key && !v.is_empty() && !seen.contains(v) {
                seen.push(v.clone());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormData {
        FormData::from_pairs(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn values_are_trimmed_and_escaped_on_ingest() {
        let form = form(&[("brand_name", "  A & B <x> \"q\" 'p'  ")]);
        assert_eq!(
            form.value("brand_name"),
            "A &amp; B &lt;x&gt; &quot;q&quot; &#39;p&#39;"
        );
    }

    #[test]
    fn missing_key_reads_as_empty() {
        let form = form(&[("name", "Sport")]);
        assert_eq!(form.value("founding_date"), "");
        assert!(form.values("biketype").is_empty());
    }

    #[test]
    fn repeated_keys_collect_in_order_without_duplicates() {
        let form = form(&[
            ("biketype", "t-2"),
            ("biketype", "t-1"),
            ("biketype", "t-2"),
            ("biketype", ""),
        ]);
        assert_eq!(form.values("biketype"), vec!["t-2", "t-1"]);
    }

    #[test]
    fn single_value_normalizes_to_one_element_list() {
        let form = form(&[("biketype", "t-7")]);
        assert_eq!(form.values("biketype"), vec!["t-7"]);
    }

    #[test]
    fn first_value_wins_for_scalar_reads() {
        let form = form(&[("power", "95 hp"), ("power", "120 hp")]);
        assert_eq!(form.value("power"), "95 hp");
    }
}
