//! View Resolution
//!
//! Turns a navigation or search request plus the loaded catalog into the
//! model the view region renders. One resolver serves every route shape.

use crate::filter::{filter_by_category, filter_by_query, find_by_id, normalize_query};
use crate::models::Item;
use crate::route::Route;

/// What the view region was asked to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewRequest {
    Route(Route),
    /// Free-text search, already normalized by the search box
    Search(String),
}

impl Default for ViewRequest {
    fn default() -> Self {
        ViewRequest::Route(Route::Home)
    }
}

/// A list of cards with an optional heading
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub heading: Option<String>,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    Listing(Listing),
    Detail(Item),
    NotFound,
}

pub fn resolve(catalog: &[Item], request: &ViewRequest) -> ViewModel {
    match request {
        ViewRequest::Route(Route::Home) => ViewModel::Listing(Listing {
            heading: None,
            items: catalog.to_vec(),
        }),
        ViewRequest::Route(Route::Category(name)) => ViewModel::Listing(Listing {
            heading: Some(name.clone()),
            items: filter_by_category(catalog, name),
        }),
        ViewRequest::Route(Route::Game(id)) => match find_by_id(catalog, id) {
            Some(item) => ViewModel::Detail(item.clone()),
            None => ViewModel::NotFound,
        },
        ViewRequest::Route(Route::NotFound(_)) => ViewModel::NotFound,
        ViewRequest::Search(query) => {
            let query = normalize_query(query);
            ViewModel::Listing(Listing {
                heading: (!query.is_empty()).then(|| format!("Results for \"{}\"", query)),
                items: filter_by_query(catalog, &query),
            })
        }
    }
}

/// Ticket handed out when a navigation starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTicket(u64);

/// Generation counter so an older navigation finishing late cannot
/// overwrite the view of a newer one.
#[derive(Debug, Clone, Default)]
pub struct NavigationCounter {
    generation: u64,
}

impl NavigationCounter {
    pub fn begin(&mut self) -> NavTicket {
        self.generation += 1;
        NavTicket(self.generation)
    }

    pub fn is_current(&self, ticket: NavTicket) -> bool {
        ticket.0 == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::{make_item, sample_catalog};
    use crate::paging::{total_pages, PaginationControls};

    fn listing(model: ViewModel) -> Listing {
        match model {
            ViewModel::Listing(listing) => listing,
            other => panic!("expected a listing, got {:?}", other),
        }
    }

    #[test]
    fn test_home_lists_everything() {
        let catalog = sample_catalog();
        let result = listing(resolve(&catalog, &ViewRequest::Route(Route::Home)));
        assert_eq!(result.items, catalog);
        assert_eq!(result.heading, None);
    }

    #[test]
    fn test_unknown_category_is_empty_listing() {
        let catalog = vec![make_item("a", "A", "", "Arcade")];
        let request = ViewRequest::Route(Route::parse("/category/Puzzle"));
        let result = listing(resolve(&catalog, &request));
        assert!(result.items.is_empty());
        assert_eq!(result.heading.as_deref(), Some("Puzzle"));
    }

    #[test]
    fn test_arcade_fits_on_one_page() {
        let catalog = sample_catalog();
        let request = ViewRequest::Route(Route::parse("/category/Arcade"));
        let result = listing(resolve(&catalog, &request));

        assert_eq!(result.items.len(), 4);
        let pages = total_pages(result.items.len(), 8);
        assert_eq!(pages, 1);
        assert!(!PaginationControls::new(1, pages, 4).is_needed());
    }

    #[test]
    fn test_search_without_matches() {
        let catalog = sample_catalog();
        let result = listing(resolve(&catalog, &ViewRequest::Search("zz".into())));
        assert!(result.items.is_empty());
        assert_eq!(result.heading.as_deref(), Some("Results for \"zz\""));
    }

    #[test]
    fn test_blank_search_lists_everything() {
        let catalog = sample_catalog();
        let result = listing(resolve(&catalog, &ViewRequest::Search("  ".into())));
        assert_eq!(result.items.len(), 10);
        assert_eq!(result.heading, None);
    }

    #[test]
    fn test_game_detail_and_not_found() {
        let catalog = sample_catalog();
        match resolve(&catalog, &ViewRequest::Route(Route::parse("/game/g3"))) {
            ViewModel::Detail(item) => assert_eq!(item.id, "g3"),
            other => panic!("expected detail, got {:?}", other),
        }
        assert_eq!(resolve(&catalog, &ViewRequest::Route(Route::parse("/game/unknown-id"))), ViewModel::NotFound);
        assert_eq!(resolve(&catalog, &ViewRequest::Route(Route::parse("/nope"))), ViewModel::NotFound);
    }

    #[test]
    fn test_numeric_ids_match_as_strings() {
        let catalog = crate::models::parse_catalog(r#"[{"id": 42, "title": "Answer"}]"#).unwrap();
        let result = resolve(&catalog, &ViewRequest::Route(Route::parse("/game/42")));
        assert!(matches!(result, ViewModel::Detail(item) if item.title == "Answer"));
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut counter = NavigationCounter::default();
        let first = counter.begin();
        assert!(counter.is_current(first));

        let second = counter.begin();
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
    }
}
