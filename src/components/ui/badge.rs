use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    // Colors come from the caller (category / status lookups).
    clx! {Badge, span, "inline-flex items-center rounded-md border px-2 py-0.5 text-xs font-medium whitespace-nowrap"}
}

pub use components::*;
