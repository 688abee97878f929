use crate::input::{classify, InputItem, InputMode};
use crate::ConversionResult;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    pub urls: Vec<String>,
    pub search_queries: Vec<String>,
}

impl ConversionRequest {
    pub fn item_count(&self) -> usize {
        self.urls.len() + self.search_queries.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Url(usize),
    Search(usize),
}

/// A request together with where each original item went, so results can
/// be put back in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPlan {
    pub request: ConversionRequest,
    items: Vec<String>,
    slots: Vec<Slot>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub results: Vec<ConversionResult>,
    /// Set when the backend answer could not be matched item by item;
    /// `results` are then left in backend order.
    pub order_mismatch: bool,
}

pub fn build_plan(mode: InputMode, items: &[String]) -> RequestPlan {
    let mut request = ConversionRequest::default();
    let mut slots = Vec::with_capacity(items.len());

    for item in items {
        let routed = match mode {
            InputMode::Search => InputItem::SearchQuery(item.trim().to_string()),
            InputMode::Single | InputMode::Batch => classify(item),
        };

        match routed {
            InputItem::Url(url) => {
                slots.push(Slot::Url(request.urls.len()));
                request.urls.push(url);
            }
            InputItem::SearchQuery(query) => {
                slots.push(Slot::Search(request.search_queries.len()));
                request.search_queries.push(query);
            }
        }
    }

    RequestPlan {
        items: request_order(&request, &slots),
        request,
        slots,
    }
}

pub fn build_request(mode: InputMode, items: &[String]) -> ConversionRequest {
    build_plan(mode, items).request
}

fn request_order(request: &ConversionRequest, slots: &[Slot]) -> Vec<String> {
    slots
        .iter()
        .map(|slot| match slot {
            Slot::Url(index) => request.urls[*index].clone(),
            Slot::Search(index) => request.search_queries[*index].clone(),
        })
        .collect()
}

impl RequestPlan {
    pub fn item_count(&self) -> usize {
        self.slots.len()
    }

    /// The backend answers URLs first, then search queries, each in
    /// submission order, echoing `originalInput`. Anything else is reported
    /// as a mismatch.
    pub fn reconcile(&self, results: Vec<ConversionResult>) -> Reconciled {
        if results.len() != self.slots.len() {
            warn!(
                expected = self.slots.len(),
                received = results.len(),
                "Backend reported a different number of results"
            );
            return Reconciled {
                results,
                order_mismatch: true,
            };
        }

        let url_count = self.request.urls.len();
        let positions = self
            .slots
            .iter()
            .map(|slot| match slot {
                Slot::Url(index) => *index,
                Slot::Search(index) => url_count + index,
            })
            .collect::<Vec<_>>();

        let echoes_match = positions
            .iter()
            .zip(&self.items)
            .all(|(position, item)| results[*position].original_input == *item);

        if !echoes_match {
            warn!("Backend results do not echo the submitted items in order");
            return Reconciled {
                results,
                order_mismatch: true,
            };
        }

        let mut slots = results.into_iter().map(Some).collect::<Vec<_>>();
        let results = positions
            .iter()
            .filter_map(|position| slots[*position].take())
            .collect();

        Reconciled {
            results,
            order_mismatch: false,
        }
    }
}
