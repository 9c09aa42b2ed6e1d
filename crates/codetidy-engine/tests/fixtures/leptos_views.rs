use leptos::*;

use crate::util::param::extract_param_str;

#[component]
pub fn UserList() -> impl IntoView {
    let query = use_query_map();
    let page = move || extract_param_str(&query, "page");
    view! {
        <ul>
            <li>{page}</li>
        </ul>
    }
}

#[component]
fn ListFooter() -> impl IntoView {
    view! { <footer>"end"</footer> }
}

#[component]
pub fn AddButton(label: String) -> impl IntoView {
    view! { <button>{label}</button> }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <UserList/>
        <AddButton label="new".to_string()/>
    }
}

#[component]
pub fn AddButton(label: String) -> impl IntoView {
    view! { <a>{label}</a> }
}
