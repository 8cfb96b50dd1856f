//! Placeholder table rows shown while a list fetch is in flight.

use leptos::prelude::*;

/// A block of shimmering placeholder rows spanning `cols` columns.
#[component]
pub fn SkeletonRows(cols: usize) -> impl IntoView {
    view! {
        {(0..5)
            .map(|row| {
                view! {
                    <tr class="skeleton-row" data-row=row>
                        {(0..cols)
                            .map(|_| {
                                view! {
                                    <td>
                                        <div class="skeleton-cell"></div>
                                    </td>
                                }
                            })
                            .collect_view()}
                    </tr>
                }
            })
            .collect_view()}
    }
}
