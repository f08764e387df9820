//! Webview-side halves of the DOM subscriptions.
//!
//! Every listener registers a detach function under `window.__masteryListeners[key]`
//! and reports back through `dioxus.send`. Re-attaching under the same key replaces the
//! previous listener, and each handler detaches itself once its anchor element is gone.

pub const SCROLL_TO_TOP: &str = "window.scrollTo(0, 0);";

const REGISTRY: &str =
    "const registry = window.__masteryListeners || (window.__masteryListeners = {});";

/// Sends `window.scrollY` on every scroll event while `anchor_id` is in the document.
#[must_use]
pub fn scroll_listener(key: &str, anchor_id: &str) -> String {
    format!(
        r#"(function() {{
            {REGISTRY}
            const key = {key:?};
            if (registry[key]) registry[key]();
            const handler = () => {{
                if (!document.getElementById({anchor_id:?})) {{
                    detach();
                    return;
                }}
                dioxus.send(window.scrollY || 0);
            }};
            const detach = () => {{
                window.removeEventListener("scroll", handler);
                if (registry[key] === detach) delete registry[key];
            }};
            window.addEventListener("scroll", handler, {{ passive: true }});
            registry[key] = detach;
            handler();
        }})();"#
    )
}

/// Sends `true` for a pointer-down landing outside every element in `inside_ids`.
#[must_use]
pub fn outside_pointer_listener(key: &str, anchor_id: &str, inside_ids: &[&str]) -> String {
    let ids_js = inside_ids
        .iter()
        .map(|id| format!("{id:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"(function() {{
            {REGISTRY}
            const key = {key:?};
            if (registry[key]) registry[key]();
            const inside = [{ids_js}];
            const handler = (event) => {{
                if (!document.getElementById({anchor_id:?})) {{
                    detach();
                    return;
                }}
                const target = event.target;
                const hit = inside.some((id) => {{
                    const el = document.getElementById(id);
                    return el && el.contains(target);
                }});
                if (!hit) dioxus.send(true);
            }};
            const detach = () => {{
                document.removeEventListener("pointerdown", handler, true);
                if (registry[key] === detach) delete registry[key];
            }};
            document.addEventListener("pointerdown", handler, true);
            registry[key] = detach;
        }})();"#
    )
}

/// Sends `true` when `element_id` scrolls into view and, unless `once`, `false` when it leaves.
#[must_use]
pub fn visibility_observer(key: &str, element_id: &str, once: bool, threshold: f64) -> String {
    format!(
        r#"(function() {{
            {REGISTRY}
            const key = {key:?};
            if (registry[key]) registry[key]();
            const el = document.getElementById({element_id:?});
            if (!el || typeof IntersectionObserver === "undefined") {{
                dioxus.send(true);
                return;
            }}
            const once = {once};
            const observer = new IntersectionObserver((entries) => {{
                if (!document.getElementById({element_id:?})) {{
                    detach();
                    return;
                }}
                for (const entry of entries) {{
                    if (entry.isIntersecting) {{
                        dioxus.send(true);
                        if (once) detach();
                    }} else if (!once) {{
                        dioxus.send(false);
                    }}
                }}
            }}, {{ root: null, rootMargin: "0px", threshold: {threshold} }});
            const detach = () => {{
                observer.disconnect();
                if (registry[key] === detach) delete registry[key];
            }};
            observer.observe(el);
            registry[key] = detach;
        }})();"#
    )
}

#[must_use]
pub fn detach_listener(key: &str) -> String {
    format!(
        r"(function() {{
            const registry = window.__masteryListeners;
            if (registry && registry[{key:?}]) registry[{key:?}]();
        }})();"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts_quote_keys_and_ids() {
        let js = outside_pointer_listener("practice-sidebar", "practice-root", &["a", "b"]);
        assert!(js.contains(r#"const key = "practice-sidebar";"#));
        assert!(js.contains(r#"const inside = ["a", "b"];"#));
        assert!(js.contains(r#"document.getElementById("practice-root")"#));
    }

    #[test]
    fn visibility_script_embeds_options() {
        let js = visibility_observer("t-1", "transition-1", false, 0.1);
        assert!(js.contains("const once = false;"));
        assert!(js.contains("threshold: 0.1"));
    }

    #[test]
    fn detach_targets_the_registry_entry() {
        let js = detach_listener("header-scroll");
        assert!(js.contains(r#"registry["header-scroll"]()"#));
    }
}
