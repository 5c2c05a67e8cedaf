use std::rc::Rc;

use dioxus::{
    dioxus_core::{NoOpMutations, VirtualDom},
    history::{History, MemoryHistory},
    prelude::*,
};
use dioxus_router::prelude::*;

use crate::Route;
use site::{config::read_config, nav::MobileMenu};

// server-side rendering harnesses for unit tests
//
// `render` draws a single page with the bundled site config in context. `RoutedApp` runs
// the whole router over an in-memory history, so the shell, links and navigation are live

#[derive(Clone, Props)]
struct HarnessProps {
    page: fn() -> Element,
}

// function pointers have no stable identity, so the harness always re-renders
impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

fn Harness(props: HarnessProps) -> Element {
    use_context_provider(|| read_config().expect("bundled site config parses"));
    let page = props.page;

    rsx! {
        {page()}
    }
}

pub fn render(page: fn() -> Element) -> String {
    let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { page });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn Routed() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

pub struct RoutedApp {
    dom: VirtualDom,
    menu: Signal<MobileMenu>,
}

impl RoutedApp {
    pub fn at(path: &str) -> Self {
        let dom = VirtualDom::new(Routed);
        dom.provide_root_context(read_config().expect("bundled site config parses"));
        dom.provide_root_context(
            Rc::new(MemoryHistory::with_initial_path(path)) as Rc<dyn History>
        );

        // lifted above the header so tests can drive it
        let menu = dom.in_runtime(|| Signal::new_in_scope(MobileMenu::default(), ScopeId::ROOT));
        dom.provide_root_context(menu);

        let mut app = Self { dom, menu };
        app.dom.rebuild_in_place();
        app.settle();
        app
    }

    // drain queued tasks, effects and the rerenders they cause
    fn settle(&mut self) {
        for _ in 0..8 {
            self.dom.render_immediate(&mut NoOpMutations);
        }
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn in_runtime<O>(&mut self, f: impl FnOnce() -> O) -> O {
        let out = self.dom.in_runtime(|| ScopeId::ROOT.in_runtime(f));
        self.settle();
        out
    }

    pub fn navigate(&mut self, route: Route) {
        self.in_runtime(|| {
            if let Some(router) = root_router() {
                router.push(route);
            }
        });
    }

    pub fn back(&mut self) {
        self.in_runtime(|| {
            if let Some(router) = root_router() {
                router.go_back();
            }
        });
    }

    pub fn menu(&self) -> Signal<MobileMenu> {
        self.menu
    }

    pub fn toggle_menu(&mut self) {
        let mut menu = self.menu;
        self.in_runtime(|| menu.write().toggle());
    }

    pub fn menu_open(&mut self) -> bool {
        let menu = self.menu;
        self.in_runtime(|| menu.peek().is_open())
    }
}

pub fn render_at(path: &str) -> String {
    RoutedApp::at(path).html()
}

// text content of every element carrying exactly `class`, in document order
pub fn texts_of_class(html: &str, class: &str) -> Vec<String> {
    let marker = format!(r#"class="{class}">"#);

    html.split(marker.as_str())
        .skip(1)
        .map(|rest| rest.split('<').next().unwrap_or_default().to_owned())
        .collect()
}

pub fn count_class(html: &str, class: &str) -> usize {
    html.matches(format!(r#"class="{class}""#).as_str()).count()
}

// labels of the anchors inside the first element opened by `open`, up to `close`
pub fn link_labels(html: &str, open: &str, close: &str) -> Vec<String> {
    let Some(start) = html.find(open) else {
        return Vec::new();
    };
    let block = &html[start + open.len()..];
    let block = block.find(close).map_or(block, |end| &block[..end]);

    block
        .split("</a>")
        .filter(|chunk| chunk.contains("<a"))
        .filter_map(|chunk| chunk.rsplit('>').next())
        .map(str::to_owned)
        .collect()
}

mod tests {
    use super::*;

    fn Blank() -> Element {
        rsx! { "blank" }
    }

    #[test]
    fn harness_props_never_compare_equal() {
        let props = HarnessProps { page: Blank };

        assert!(props != props.clone());
        assert_eq!(render(Blank), "blank");
    }
}
