use leptos::prelude::*;

/// 404 fallback page.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="page">
			<h1>"Page not found"</h1>
			<p>"The page you are looking for does not exist."</p>
			<a href="/">"Back to the learning path"</a>
		</div>
	}
}
