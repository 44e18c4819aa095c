use serde::Deserialize;
use validator::Validate;

use crate::forms::FormError;
use crate::repository::ListQuery;

pub const MAX_SEARCH_LENGTH: u64 = 255;

#[derive(Debug, Default, Deserialize, Validate)]
/// Query string of a list page.
pub struct ListQueryForm {
    /// Free-text filter typed into the search box.
    #[validate(length(max = MAX_SEARCH_LENGTH))]
    pub search: Option<String>,
    /// Requested page, first page when absent.
    #[validate(range(min = 1))]
    pub page: Option<u32>,
}

impl ListQueryForm {
    /// Validates the form and converts it into an endpoint query.
    pub fn validated_query(&self, per_page: u32) -> Result<ListQuery, FormError> {
        self.validate()?;
        Ok(self.to_query(per_page))
    }

    /// Converts the validated form into an endpoint query.
    pub fn to_query(&self, per_page: u32) -> ListQuery {
        ListQuery::new()
            .search(self.search.as_deref().unwrap_or_default())
            .paginate(self.page.unwrap_or(1), per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_becomes_no_filter() {
        let form = ListQueryForm {
            search: Some("  ".to_string()),
            page: None,
        };

        let query = form.to_query(15);

        assert_eq!(query.search, None);
        assert_eq!(query.page, Some(1));
        assert_eq!(query.per_page, Some(15));
    }

    #[test]
    fn rejects_page_zero_and_oversized_search() {
        let form = ListQueryForm {
            search: Some("x".repeat(MAX_SEARCH_LENGTH as usize + 1)),
            page: Some(0),
        };

        let errors = form.validate().unwrap_err();

        let fields = errors.field_errors();
        assert!(fields.contains_key("search"));
        assert!(fields.contains_key("page"));
    }

    #[test]
    fn accepts_search_at_the_length_limit() {
        let form = ListQueryForm {
            search: Some("x".repeat(MAX_SEARCH_LENGTH as usize)),
            page: Some(1),
        };

        assert!(form.validate().is_ok());
    }

    #[test]
    fn validated_query_surfaces_form_errors() {
        let form = ListQueryForm {
            search: Some("laptop".to_string()),
            page: Some(0),
        };

        assert!(matches!(
            form.validated_query(15),
            Err(FormError::Validation(_))
        ));
    }
}
