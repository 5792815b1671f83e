use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().format("%Y").to_string();

    html! {
        <footer class="mt-10 py-4 bg-gray-800 text-gray-300 text-center text-sm">
            { format!("© {year} ZapLink. Short links, long reach.") }
        </footer>
    }
}
