//! Static navigation menu data for the header bar.
//!
//! Presentational only; no business logic hangs off these entries.

pub struct MenuEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub slug: &'static str,
    pub submenu: &'static [SubmenuEntry],
}

pub struct SubmenuEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub slug: &'static str,
}

/// Default account display name for the header avatar slot.
pub const ACCOUNT_NAME: &str = "Vanessa";

// "Identities" appears twice in the upstream menu data; kept verbatim.
pub const MENU: &[MenuEntry] = &[
    MenuEntry {
        id: "menu-1",
        name: "Apps",
        slug: "/apps",
        submenu: &[
            SubmenuEntry {
                id: "submenu-1",
                name: "Sub menu 1",
                slug: "/apps/link-1",
            },
            SubmenuEntry {
                id: "submenu-2",
                name: "Sub menu 2",
                slug: "/apps/link-2",
            },
        ],
    },
    MenuEntry {
        id: "menu-2",
        name: "Data",
        slug: "/data",
        submenu: &[
            SubmenuEntry {
                id: "submenu-21",
                name: "Sub menu 1",
                slug: "/apps/link-1",
            },
            SubmenuEntry {
                id: "submenu-22",
                name: "Sub menu 2",
                slug: "/apps/link-2",
            },
        ],
    },
    MenuEntry {
        id: "menu-3",
        name: "Identities",
        slug: "/identities",
        submenu: &[],
    },
    MenuEntry {
        id: "menu-4",
        name: "Identities",
        slug: "/identities",
        submenu: &[],
    },
    MenuEntry {
        id: "menu-5",
        name: "Alerts",
        slug: "/alerts",
        submenu: &[],
    },
    MenuEntry {
        id: "menu-6",
        name: "Investigation Center",
        slug: "/investigation-center",
        submenu: &[],
    },
    MenuEntry {
        id: "menu-7",
        name: "Configurations",
        slug: "/configurations",
        submenu: &[
            SubmenuEntry {
                id: "submenu-71",
                name: "Sub menu 1",
                slug: "/apps/link-1",
            },
            SubmenuEntry {
                id: "submenu-72",
                name: "Sub menu 2",
                slug: "/apps/link-2",
            },
        ],
    },
];
