use indexmap::IndexMap;

/// Settings parsed from a field tag such as `column:product_sku;size:64`.
///
/// Entries are separated by `;` (a `\;` keeps the separator inside the
/// value). Each entry is `key:value`; keys are trimmed and upper-cased and
/// everything after the first `:` is the value. An entry without a value maps
/// the key to itself, so `primaryKey` becomes `PRIMARYKEY => PRIMARYKEY`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSettings {
    settings: IndexMap<String, String>,
}

impl TagSettings {
    pub fn parse(src: &str) -> TagSettings {
        let mut settings = IndexMap::new();
        let mut parts = src.split(';');

        while let Some(part) = parts.next() {
            let mut entry = part.to_string();

            while entry.ends_with('\\') {
                entry.pop();
                match parts.next() {
                    Some(next) => {
                        entry.push(';');
                        entry.push_str(next);
                    }
                    None => break,
                }
            }

            let (key, value) = match entry.split_once(':') {
                Some((key, value)) => (key, Some(value)),
                None => (entry.as_str(), None),
            };
            let key = key.trim().to_uppercase();

            match value {
                Some(value) => {
                    settings.insert(key, value.to_string());
                }
                None if !key.is_empty() => {
                    settings.insert(key.clone(), key);
                }
                None => {}
            }
        }

        TagSettings { settings }
    }

    /// Value of the setting `key`. Keys are stored upper-cased.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.settings.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.settings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
