use crate::components::Navbar;
use yew::prelude::*;

const GITHUB_PROFILE: &str = "https://github.com/BrianZ050";

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="layout">
            <Navbar />
            <main class="main-content">
                {for props.children.iter()}
            </main>
            <footer class="site-footer">
                <a href={GITHUB_PROFILE} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
            </footer>
        </div>
    }
}
