//! Services behind the list pages of every inventory collection.

use crate::domain::Resource;
use crate::dto::list::ListPageData;
use crate::dto::table::Tabular;
use crate::forms::list::ListQueryForm;
use crate::pagination;
use crate::repository::ListEndpoint;
use crate::services::ServiceResult;

fn empty_message<T: Resource>(search: Option<&str>) -> String {
    let plural = T::TITLE.to_lowercase();
    match search {
        Some(term) => format!("No {plural} match \"{term}\"."),
        None => format!("No {plural} yet."),
    }
}

/// Loads one page of records and lays it out for the list template.
pub async fn load_list_page<E>(
    endpoint: &E,
    form: &ListQueryForm,
    per_page: u32,
) -> ServiceResult<ListPageData>
where
    E: ListEndpoint + ?Sized,
    E::Record: Tabular,
{
    let query = form.validated_query(per_page).map_err(|err| {
        log::error!("Failed to validate list query: {err}");
        err
    })?;

    let page = endpoint.fetch_page(&query).await.map_err(|err| {
        log::error!("Failed to list {}: {err}", <E::Record as Resource>::PATH);
        err
    })?;

    let pagination = pagination::plan(&page.links, page.meta.current_page, page.meta.last_page);
    let empty_message = page
        .data
        .is_empty()
        .then(|| empty_message::<E::Record>(query.search.as_deref()));
    let rows = page.data.iter().map(Tabular::table_row).collect();

    Ok(ListPageData {
        title: <E::Record as Resource>::TITLE,
        path: <E::Record as Resource>::PATH,
        columns: <E::Record as Tabular>::COLUMNS,
        rows,
        pagination,
        meta: page.meta,
        search_query: query.search,
        empty_message,
    })
}

/// Deletes the record identified by the raw path id.
pub async fn delete_record<E>(endpoint: &E, id: i64) -> ServiceResult<()>
where
    E: ListEndpoint + ?Sized,
{
    let id: <E::Record as Resource>::Id = id.try_into()?;

    endpoint.delete_record(id).await.map_err(|err| {
        log::error!("Failed to delete {} {id}: {err}", <E::Record as Resource>::SINGULAR);
        err
    })?;

    Ok(())
}
