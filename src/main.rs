mod catalog;
mod components;
mod economy;
mod model;
mod planner;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
