use yew::prelude::*;

use crate::config::ResultEntry;

#[derive(Properties, Clone, PartialEq)]
pub struct ResultsProps {
    pub results: Vec<ResultEntry>,
}

/// Winners list. Hidden until at least one entry is supplied; every
/// render replaces the whole list, so republishing is wholesale rather
/// than additive.
#[function_component(Results)]
pub fn results(props: &ResultsProps) -> Html {
    let hidden = props.results.is_empty();

    html! {
        <div
            id="results"
            class={classes!(
                "rounded-2xl", "bg-white", "shadow-sm", "border", "border-gray-200", "p-6",
                hidden.then_some("hidden")
            )}
        >
            <h3 class="text-xl font-bold text-gray-900 mb-4">{"Winners"}</h3>
            <div id="resultsContent">
                <ol class="list-decimal list-inside space-y-2 text-gray-700">
                    {
                        // Keyed by position: the same team can take more
                        // than one prize.
                        props.results.iter().enumerate().map(|(i, entry)| html! {
                            <li key={i}>{ entry.line() }</li>
                        }).collect::<Html>()
                    }
                </ol>
            </div>
        </div>
    }
}
