use dioxus::prelude::*;

// icons from: https://primer.style/foundations/icons/

/// The svg pieces for one icon. Kept as plain data so the lookup stays a
/// pure function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconFragment {
    pub view_box: &'static str,
    pub path: &'static str,
    pub fill: Option<&'static str>,
}

const X_CIRCLE_FILL: IconFragment = IconFragment {
    view_box: "0 0 12 12",
    path: "M1.757 10.243a6.001 6.001 0 1 1 8.488-8.486 6.001 6.001 0 0 1-8.488 8.486ZM6 4.763l-2-2L2.763 4l2 2-2 2L4 9.237l2-2 2 2L9.237 8l-2-2 2-2L8 2.763Z",
    fill: None,
};

const X: IconFragment = IconFragment {
    view_box: "0 0 16 16",
    path: "M3.72 3.72a.75.75 0 0 1 1.06 0L8 6.94l3.22-3.22a.749.749 0 0 1 1.275.326.749.749 0 0 1-.215.734L9.06 8l3.22 3.22a.749.749 0 0 1-.326 1.275.749.749 0 0 1-.734-.215L8 9.06l-3.22 3.22a.751.751 0 0 1-1.042-.018.751.751 0 0 1-.018-1.042L6.94 8 3.72 4.78a.75.75 0 0 1 0-1.06Z",
    fill: None,
};

const CHECK: IconFragment = IconFragment {
    view_box: "0 0 16 16",
    path: "M13.78 4.22a.75.75 0 0 1 0 1.06l-7.25 7.25a.75.75 0 0 1-1.06 0L2.22 9.28a.751.751 0 0 1 .018-1.042.751.751 0 0 1 1.042-.018L6 10.94l6.72-6.72a.75.75 0 0 1 1.06 0Z",
    fill: None,
};

// red so a typo in an icon name shows up on the page instead of crashing
const UNKNOWN: IconFragment = IconFragment {
    view_box: "0 0 12 12",
    path: X_CIRCLE_FILL.path,
    fill: Some("red"),
};

/// Maps an icon name to its fragment. Unrecognized names get the red
/// fallback fragment.
pub fn icon_fragment(name: &str) -> IconFragment {
    match name {
        "x-circle-fill" => X_CIRCLE_FILL,
        "x" => X,
        "check" => CHECK,
        _ => UNKNOWN,
    }
}

#[component]
pub fn Icon(#[props(default = "n/a".to_string())] name: String) -> Element {
    let frag = icon_fragment(&name);
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: frag.view_box,
            // 1em so the icon tracks the surrounding font size
            style: "width: 1em; height: 1em;",
            path { d: frag.path, fill: frag.fill }
        }
    }
}
