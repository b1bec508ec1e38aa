use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - first/prev/next/last page buttons
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let is_first = move || current_page.get() == 0;
    let is_last = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pagination-controls" aria-label="Pagination">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(0)
                    disabled=is_first
                    title="First page"
                >
                    {icon("chevrons-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 0 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=is_first
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                <span class="pagination-info">
                    {move || format!("Page {} of {}", current_page.get() + 1, total_pages.get().max(1))}
                </span>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page + 1 < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=is_last
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let total = total_pages.get();
                        if total > 0 {
                            on_page_change.run(total - 1);
                        }
                    }
                    disabled=is_last
                    title="Last page"
                >
                    {icon("chevrons-right")}
                </button>
            </nav>
        </Show>
    }
}
