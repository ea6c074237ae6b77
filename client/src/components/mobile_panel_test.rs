use super::*;
use crate::components::mobile_navigation_item::{MobileRow, visible_children};
use crate::components::navigation_bar::{MENU_LABEL, toggle_label};
use crate::menu::{NavChild, NavEntry};
use crate::state::disclosure::{Disclosure, DisclosureTrigger};

fn narrow_menu() -> NavMenu {
    NavMenu::new(vec![
        NavEntry::leaf("Overview", "/overview"),
        NavEntry::group("Support", "#", vec![NavChild::new("FAQ", "/support/faq")]),
    ])
}

#[test]
fn escape_reports_close_and_other_keys_do_not() {
    let owner = Owner::new();
    owner.with(|| {
        let panel = RwSignal::new(Disclosure::Open);
        let on_close = Callback::new(move |()| panel.update(|p| *p = p.apply(DisclosureTrigger::Dismiss)));

        assert!(!dismiss_on_key("Enter", on_close));
        assert!(!dismiss_on_key("escape", on_close));
        assert!(panel.get_untracked().is_open());

        assert!(dismiss_on_key("Escape", on_close));
        assert_eq!(panel.get_untracked(), Disclosure::Closed);
        assert_eq!(toggle_label(panel.get_untracked()), MENU_LABEL);

        // A second Escape after closing cannot reopen the panel.
        assert!(dismiss_on_key("Esc", on_close));
        assert_eq!(panel.get_untracked(), Disclosure::Closed);
    });
}

#[test]
fn narrow_viewport_open_expand_collapse_close() {
    let menu = narrow_menu();

    let mut panel = Disclosure::default();
    assert_eq!(toggle_label(panel), "Menu");

    panel = panel.apply(DisclosureTrigger::Activate);
    assert!(panel.is_open());
    assert_eq!(toggle_label(panel), "Close");

    // One expansion flag per mounted row.
    let mut rows = vec![Disclosure::default(); menu.len()];
    assert_eq!(rows.len(), 2);
    assert_eq!(MobileRow::for_entry(&menu.entries()[0]), MobileRow::Label);

    let support = &menu.entries()[1];
    assert_eq!(MobileRow::for_entry(support), MobileRow::Expandable);

    rows[1] = rows[1].apply(DisclosureTrigger::Activate);
    assert_eq!(visible_children(&support.children, rows[1]), &[NavChild::new("FAQ", "/support/faq")]);

    rows[1] = rows[1].apply(DisclosureTrigger::Activate);
    assert!(visible_children(&support.children, rows[1]).is_empty());

    panel = panel.apply(DisclosureTrigger::Dismiss);
    assert!(!panel.is_open());
    assert_eq!(toggle_label(panel), MENU_LABEL);
}

#[test]
fn expanding_one_row_leaves_siblings_alone() {
    let menu = NavMenu::new(vec![
        NavEntry::group("Support", "#", vec![NavChild::new("FAQ", "/support/faq")]),
        NavEntry::group("Company", "#", vec![NavChild::new("About Us", "/company/about-us")]),
    ]);
    let mut rows = vec![Disclosure::default(); menu.len()];

    rows[0] = rows[0].apply(DisclosureTrigger::Activate);

    assert!(rows[0].is_open());
    assert_eq!(rows[1], Disclosure::Closed);
    assert!(visible_children(&menu.entries()[1].children, rows[1]).is_empty());
}

#[cfg(feature = "ssr")]
mod render {
    use super::*;
    use crate::components::ssr_render::{inner_after, opening_tag, render_html};

    #[test]
    fn panel_renders_dialog_with_close_button_and_rows() {
        let html = render_html(|| {
            let on_close = Callback::new(|()| {});
            view! { <MobilePanel menu=narrow_menu() on_close/> }
        });

        let dialog = opening_tag(&html, "sitenav-mobile-panel");
        assert!(dialog.contains(r#"role="dialog""#), "{dialog}");
        assert!(dialog.contains(r#"aria-modal="true""#), "{dialog}");

        assert!(opening_tag(&html, "mobile-panel__close").starts_with("<button"));
        assert!(inner_after(&html, "mobile-panel__close", "</button>").contains(CLOSE_LABEL));
        assert!(html.find("mobile-panel__close") < html.find("mobile-panel__list"));

        assert_eq!(html.matches(r#"class="mobile-item""#).count(), 2, "{html}");
        assert!(html.find("Overview") < html.find("Support"));
        assert!(!html.contains("mobile-item__children"));
    }
}
