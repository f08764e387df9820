use dioxus::prelude::*;

use mastery_core::model::FeatureIcon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Menu,
    Close,
    Home,
    Target,
    BarChart,
    Settings,
    FileText,
    Book,
    Timer,
    Award,
    ArrowRight,
    ArrowLeft,
    Zap,
    Brain,
    LineChart,
    Clock,
    Calendar,
    Trophy,
    Activity,
    Check,
    Dumbbell,
    Sun,
    Moon,
}

impl IconKind {
    fn path(self) -> &'static str {
        match self {
            IconKind::Menu => "M4 6h16M4 12h16M4 18h16",
            IconKind::Close => "M6 6l12 12M18 6L6 18",
            IconKind::Home => "M3 11l9-8 9 8M5 10v10h5v-6h4v6h5V10",
            IconKind::Target => "M12 3a9 9 0 1 0 0 18 9 9 0 1 0 0-18M12 7a5 5 0 1 0 0 10 5 5 0 1 0 0-10M12 11a1 1 0 1 0 0 2 1 1 0 1 0 0-2",
            IconKind::BarChart => "M4 20V10M10 20V4M16 20v-7M22 20H2",
            IconKind::Settings => "M12 9a3 3 0 1 0 0 6 3 3 0 1 0 0-6M12 2v3M12 19v3M4.2 4.2l2.1 2.1M17.7 17.7l2.1 2.1M2 12h3M19 12h3M4.2 19.8l2.1-2.1M17.7 6.3l2.1-2.1",
            IconKind::FileText => "M14 2H6v20h12V6zM14 2v4h4M8 13h8M8 17h8",
            IconKind::Book => "M4 19V5a2 2 0 0 1 2-2h14v16H6a2 2 0 0 0-2 2 2 2 0 0 0 2 2h14",
            IconKind::Timer => "M10 2h4M12 14l3-3M12 6a8 8 0 1 0 0 16 8 8 0 1 0 0-16",
            IconKind::Award => "M12 2a6 6 0 1 0 0 12 6 6 0 1 0 0-12M8.2 13L7 22l5-3 5 3-1.2-9",
            IconKind::ArrowRight => "M5 12h14M13 6l6 6-6 6",
            IconKind::ArrowLeft => "M19 12H5M11 6l-6 6 6 6",
            IconKind::Zap => "M13 2L3 14h9l-1 8 10-12h-9z",
            IconKind::Brain => "M9 3a3 3 0 0 0-3 3 3 3 0 0 0-2 5 3 3 0 0 0 2 5 3 3 0 0 0 6 2V4a3 3 0 0 0-3-1M15 3a3 3 0 0 1 3 3 3 3 0 0 1 2 5 3 3 0 0 1-2 5 3 3 0 0 1-6 2",
            IconKind::LineChart => "M3 3v18h18M7 15l4-4 3 3 6-6",
            IconKind::Clock => "M12 3a9 9 0 1 0 0 18 9 9 0 1 0 0-18M12 7v5l3 2",
            IconKind::Calendar => "M4 5h16v16H4zM16 3v4M8 3v4M4 11h16",
            IconKind::Trophy => "M8 21h8M12 17v4M7 4h10v5a5 5 0 0 1-10 0zM7 6H4a3 3 0 0 0 3 4M17 6h3a3 3 0 0 1-3 4",
            IconKind::Activity => "M22 12h-4l-3 9L9 3l-3 9H2",
            IconKind::Check => "M5 12l5 5L20 7",
            IconKind::Dumbbell => "M6 6v12M18 6v12M3 9v6M21 9v6M6 12h12",
            IconKind::Sun => "M12 8a4 4 0 1 0 0 8 4 4 0 1 0 0-8M12 2v2M12 20v2M4.9 4.9l1.4 1.4M17.7 17.7l1.4 1.4M2 12h2M20 12h2M4.9 19.1l1.4-1.4M17.7 6.3l1.4-1.4",
            IconKind::Moon => "M21 13A9 9 0 1 1 11 3a7 7 0 0 0 10 10z",
        }
    }
}

impl From<FeatureIcon> for IconKind {
    fn from(icon: FeatureIcon) -> Self {
        match icon {
            FeatureIcon::Zap => IconKind::Zap,
            FeatureIcon::Brain => IconKind::Brain,
            FeatureIcon::LineChart => IconKind::LineChart,
            FeatureIcon::BarChart => IconKind::BarChart,
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[props(default = "icon")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: class,
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.8",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: kind.path() }
        }
    }
}
