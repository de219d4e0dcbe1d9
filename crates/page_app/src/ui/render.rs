use page_core::{ClassNames, PageViewModel};

/// DOM regions whose presentation is driven by the view model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    MenuToggle,
    MenuPanel,
    MainNav,
    ScrollTop,
    ProgressBar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomCommand {
    SetClass {
        region: Region,
        class: &'static str,
        enabled: bool,
    },
    SetTransform {
        region: Region,
        value: String,
    },
}

pub fn render(view: &PageViewModel, classes: &ClassNames) -> Vec<DomCommand> {
    vec![
        DomCommand::SetClass {
            region: Region::MenuToggle,
            class: classes.menu_open,
            enabled: view.menu_open,
        },
        DomCommand::SetClass {
            region: Region::MenuPanel,
            class: classes.menu_open,
            enabled: view.menu_open,
        },
        DomCommand::SetTransform {
            region: Region::ProgressBar,
            value: scale_x(view.progress),
        },
        DomCommand::SetClass {
            region: Region::MainNav,
            class: classes.nav_scrolled,
            enabled: view.nav_scrolled,
        },
        DomCommand::SetClass {
            region: Region::ScrollTop,
            class: classes.scroll_top_shown,
            enabled: view.scroll_top_visible,
        },
    ]
}

fn scale_x(ratio: f64) -> String {
    format!("scaleX({ratio})")
}
