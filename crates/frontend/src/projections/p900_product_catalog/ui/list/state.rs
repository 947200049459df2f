use contracts::projections::p900_product_catalog::{FilterAction, FilterState};
use leptos::logging::log;
use leptos::prelude::*;

pub fn create_state() -> RwSignal<FilterState> {
    RwSignal::new(FilterState::default())
}

/// Применяет действие к состоянию фильтров через reducer
pub fn dispatch(state: RwSignal<FilterState>, action: FilterAction) {
    log!("p900 filter action: {:?}", action);
    state.update(|s| *s = std::mem::take(s).apply(action));
}
