use crate::form::field::FieldName;

/// Which fields have lost focus at least once since the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchedFlags {
    pub title: bool,
    pub description: bool,
    pub img_url: bool,
    pub imdb_url: bool,
    pub imdb_id: bool,
}

impl TouchedFlags {
    pub fn get(&self, field: FieldName) -> bool {
        match field {
            FieldName::Title => self.title,
            FieldName::Description => self.description,
            FieldName::ImgUrl => self.img_url,
            FieldName::ImdbUrl => self.imdb_url,
            FieldName::ImdbId => self.imdb_id,
        }
    }

    pub fn mark(&mut self, field: FieldName) {
        *self.slot(field) = true;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        FieldName::ALL.into_iter().any(|field| self.get(field))
    }

    fn slot(&mut self, field: FieldName) -> &mut bool {
        match field {
            FieldName::Title => &mut self.title,
            FieldName::Description => &mut self.description,
            FieldName::ImgUrl => &mut self.img_url,
            FieldName::ImdbUrl => &mut self.imdb_url,
            FieldName::ImdbId => &mut self.imdb_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TouchedFlags;
    use crate::form::field::FieldName;

    #[test]
    fn marking_one_field_leaves_the_rest() {
        for target in FieldName::ALL {
            let mut flags = TouchedFlags::default();
            flags.mark(target);
            for field in FieldName::ALL {
                assert_eq!(flags.get(field), field == target, "{target} vs {field}");
            }
        }
    }

    #[test]
    fn reset_clears_everything() {
        let mut flags = TouchedFlags::default();
        flags.mark(FieldName::Title);
        flags.mark(FieldName::ImdbId);
        assert!(flags.any());
        flags.reset();
        assert!(!flags.any());
    }
}
