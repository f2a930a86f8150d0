use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="bg-gradient-to-r from-slate-900 to-indigo-900 text-white mt-auto">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="flex flex-col sm:flex-row justify-between items-center space-y-4 sm:space-y-0">
                    <div class="text-center sm:text-left">
                        <span class="text-xl font-bold tracking-tight mr-2">{"HackIgnite"}</span>
                        <p class="text-indigo-200 text-sm mt-1">
                            {"Ignite your ideas. Build something real."}
                        </p>
                    </div>
                    <p class="text-indigo-200 text-sm">
                        {"© "}<span id="year">{ year }</span>{" HackIgnite Organizing Committee"}
                    </p>
                </div>
            </div>
        </footer>
    }
}
