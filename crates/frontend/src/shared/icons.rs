use leptos::prelude::*;

pub fn icon(name: &str) -> AnyView {
    match name {
        "search" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <circle cx="11" cy="11" r="8"/>
                <path d="m21 21-4.35-4.35"/>
            </svg>
        }.into_any(),
        "x" => view! {
            <svg width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <line x1="18" y1="6" x2="6" y2="18"/>
                <line x1="6" y1="6" x2="18" y2="18"/>
            </svg>
        }.into_any(),
        "sort" => view! {
            <svg width="12" height="16" viewBox="0 0 12 24" fill="currentColor" aria-hidden="true">
                <path d="M6 3 11 10H1z"/>
                <path d="M6 21 1 14h10z"/>
            </svg>
        }.into_any(),
        "sort-up" => view! {
            <svg width="12" height="16" viewBox="0 0 12 24" fill="currentColor" aria-hidden="true">
                <path d="M6 3 11 10H1z"/>
            </svg>
        }.into_any(),
        "sort-down" => view! {
            <svg width="12" height="16" viewBox="0 0 12 24" fill="currentColor" aria-hidden="true">
                <path d="M6 21 1 14h10z"/>
            </svg>
        }.into_any(),
        "filter" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <polygon points="22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3"/>
            </svg>
        }.into_any(),
        _ => view! { <span></span> }.into_any(),
    }
}
