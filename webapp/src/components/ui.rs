use dioxus::prelude::*;

use site::content::Heading;

// presentational primitives
//
// none of these hold state.  each takes its content as children plus a few style flags, and
// an optional extra class appended after the base class

fn classes(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_owned()
    } else {
        format!("{base} {extra}")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Solid => "btn-solid",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

pub fn button_class(variant: ButtonVariant, small: bool, extra: &str) -> String {
    let base = if small {
        format!("btn {} btn-sm", variant.class())
    } else {
        format!("btn {}", variant.class())
    };

    classes(&base, extra)
}

#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    variant: ButtonVariant,
    #[props(default)]
    small: bool,
    // only form buttons submit; everything else is type=button
    #[props(default)]
    submit: bool,
    #[props(default)]
    class: &'static str,
    children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = button_class(props.variant, props.small, props.class);
    let button_type = if props.submit { "submit" } else { "button" };

    rsx! {
        button { class: "{class}", r#type: button_type, {props.children} }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct BoxProps {
    #[props(default)]
    class: &'static str,
    children: Element,
}

#[component]
pub fn Card(props: BoxProps) -> Element {
    let class = classes("card", props.class);

    rsx! {
        div { class: "{class}", {props.children} }
    }
}

#[component]
pub fn CardHeader(props: BoxProps) -> Element {
    let class = classes("card-header", props.class);

    rsx! {
        div { class: "{class}", {props.children} }
    }
}

#[component]
pub fn CardTitle(props: BoxProps) -> Element {
    let class = classes("card-title", props.class);

    rsx! {
        h3 { class: "{class}", {props.children} }
    }
}

#[component]
pub fn CardContent(props: BoxProps) -> Element {
    let class = classes("card-content", props.class);

    rsx! {
        div { class: "{class}", {props.children} }
    }
}

#[component]
pub fn Container(props: BoxProps) -> Element {
    let class = classes("container", props.class);

    rsx! {
        div { class: "{class}", {props.children} }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SectionProps {
    #[props(default)]
    id: Option<&'static str>,
    #[props(default)]
    heading: Option<Heading>,
    #[props(default)]
    class: &'static str,
    // rendered at the trailing edge of the heading row, e.g. a "see all" link
    #[props(default)]
    header_extra: Option<Element>,
    children: Element,
}

#[component]
pub fn Section(props: SectionProps) -> Element {
    let class = classes("section", props.class);

    rsx! {
        section { id: props.id, class: "{class}",
            Container {
                if let Some(heading) = props.heading {
                    div { class: "section-header",
                        div {
                            p { class: "section-subtitle", "{heading.subtitle}" }
                            h2 { class: "section-title", "{heading.title}" }
                        }
                        {props.header_extra}
                    }
                }
                {props.children}
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct PillProps {
    children: Element,
}

#[component]
pub fn Pill(props: PillProps) -> Element {
    rsx! {
        span { class: "pill", {props.children} }
    }
}

// text glyphs standing in for an icon set
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Glyph {
    Menu,
    Phone,
    Mail,
    MapPin,
    ChevronRight,
    Check,
    Play,
    Facebook,
    Instagram,
    Linkedin,
    External,
}

impl Glyph {
    pub fn from_social(name: &str) -> Self {
        match name {
            "facebook" => Glyph::Facebook,
            "instagram" => Glyph::Instagram,
            "linkedin" => Glyph::Linkedin,
            _ => Glyph::External,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Glyph::Menu => "☰",
            Glyph::Phone => "☎",
            Glyph::Mail => "✉",
            Glyph::MapPin => "⌖",
            Glyph::ChevronRight => "›",
            Glyph::Check => "✓",
            Glyph::Play => "▶",
            Glyph::Facebook => "f",
            Glyph::Instagram => "◎",
            Glyph::Linkedin => "in",
            Glyph::External => "↗",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    glyph: Glyph,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    let glyph = props.glyph.as_str();

    rsx! {
        span { class: "icon", "aria-hidden": "true", "{glyph}" }
    }
}

/// Renders a slice of records as a grid, one `render` call per record.  `columns` carries the
/// responsive column classes for the grid container.
pub fn card_grid<T>(items: &[T], columns: &str, render: impl Fn(usize, &T) -> Element) -> Element {
    let class = classes("grid", columns);

    rsx! {
        div { class: "{class}",
            for (idx, item) in items.iter().enumerate() {
                {render(idx, item)}
            }
        }
    }
}
