use crate::form::field::FieldName;
use crate::form::record::MovieRecord;
use crate::widgets::validators::trim_value;

/// Current raw text of every field, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub title: String,
    pub description: String,
    pub img_url: String,
    pub imdb_url: String,
    pub imdb_id: String,
}

impl FieldValues {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Title => &self.title,
            FieldName::Description => &self.description,
            FieldName::ImgUrl => &self.img_url,
            FieldName::ImdbUrl => &self.imdb_url,
            FieldName::ImdbId => &self.imdb_id,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        let slot = match field {
            FieldName::Title => &mut self.title,
            FieldName::Description => &mut self.description,
            FieldName::ImgUrl => &mut self.img_url,
            FieldName::ImdbUrl => &mut self.imdb_url,
            FieldName::ImdbId => &mut self.imdb_id,
        };
        *slot = value;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_record(&self) -> MovieRecord {
        MovieRecord {
            title: trim_value(&self.title).to_string(),
            description: trim_value(&self.description).to_string(),
            img_url: trim_value(&self.img_url).to_string(),
            imdb_url: trim_value(&self.imdb_url).to_string(),
            imdb_id: trim_value(&self.imdb_id).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FieldValues;
    use crate::form::field::FieldName;

    #[test]
    fn set_and_get_address_the_same_slot() {
        let mut values = FieldValues::default();
        for field in FieldName::ALL {
            values.set(field, format!(" {} ", field.key()));
        }
        for field in FieldName::ALL {
            assert_eq!(values.get(field), format!(" {} ", field.key()));
        }
    }

    #[test]
    fn record_is_trimmed_and_trimming_is_idempotent() {
        let mut values = FieldValues::default();
        values.set(FieldName::Title, "  Inception \t".to_string());
        values.set(FieldName::ImdbId, "\ntt1 ".to_string());
        let record = values.to_record();
        assert_eq!(record.title, "Inception");
        assert_eq!(record.imdb_id, "tt1");
        assert_eq!(crate::widgets::validators::trim_value(&record.title), record.title);

        let mut again = FieldValues::default();
        again.set(FieldName::Title, record.title.clone());
        again.set(FieldName::ImdbId, record.imdb_id.clone());
        assert_eq!(again.to_record(), record);
    }

    #[test]
    fn record_trims_byte_order_marks() {
        let mut values = FieldValues::default();
        values.set(FieldName::ImdbId, "\u{FEFF}tt1\u{FEFF}".to_string());
        values.set(FieldName::Description, "\u{85}note".to_string());
        let record = values.to_record();
        assert_eq!(record.imdb_id, "tt1");
        assert_eq!(record.description, "\u{85}note");
    }
}
