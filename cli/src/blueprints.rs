//! # TreeForge Built-in Blueprints
//!
//! File: cli/src/blueprints.rs
//!
//! ## Overview
//!
//! Sample tree descriptions shipped inside the binary. `treeforge blueprint`
//! lists them, prints them and turns them into projects exactly as if the text
//! had been passed to `treeforge generate`.
//!
//! Each blueprint carries the project type it was written for; the tree text
//! has no wrapping project folder (the project name is supplied at creation
//! time) and uses the default 4-column unit.
//!

/// A named tree description with a preferred project type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blueprint {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Plugin id used when the user does not pass `--type`.
    pub project_type: &'static str,
    pub tree: &'static str,
}

const SAAS_TREE: &str = "\
app/
├── layout.tsx
├── page.tsx
├── globals.css
├── pricing/
│   └── page.tsx
├── dashboard/
│   ├── layout.tsx
│   ├── page.tsx
│   └── loading.tsx
└── api/
    └── billing/
        └── route.ts
components/
├── Navbar.tsx
├── Hero.tsx
├── PricingTable.tsx
├── Footer.tsx
└── ui/
    ├── Button.tsx
    └── Card.tsx
lib/
├── utils.ts
└── types.ts
public/
package.json
tsconfig.json
next.config.js
tailwind.config.js
.env.example
";

const ECOMMERCE_TREE: &str = "\
app/
├── layout.tsx
├── page.tsx
├── globals.css
├── products/
│   ├── page.tsx
│   └── loading.tsx
├── cart/
│   └── page.tsx
├── not-found.tsx
└── api/
    ├── products/
    │   └── route.ts
    └── checkout/
        └── route.ts
components/
├── Header.tsx
├── ProductCard.tsx
├── ProductGrid.tsx
├── Cart.tsx
└── Footer.tsx
lib/
├── api.ts
├── utils.ts
└── types.ts
public/
package.json
tsconfig.json
next.config.js
";

const DASHBOARD_TREE: &str = "\
index.html
package.json
tsconfig.json
vite.config.ts
src/
├── main.tsx
├── App.tsx
├── index.css
├── components/
│   ├── Sidebar.tsx
│   ├── Navbar.tsx
│   ├── StatsCard.tsx
│   ├── RevenueChart.tsx
│   └── Button.tsx
└── lib/
    ├── api.ts
    ├── utils.ts
    └── types.ts
public/
";

const BLOG_TREE: &str = "\
app/
├── layout.tsx
├── page.tsx
├── globals.css
├── posts/
│   ├── page.tsx
│   └── loading.tsx
└── about/
    └── page.tsx
components/
├── Header.tsx
├── Footer.tsx
└── PostCard.tsx
content/
├── hello-world.md
└── second-post.md
lib/
├── utils.ts
└── types.ts
package.json
tsconfig.json
next.config.mjs
";

const API_TREE: &str = "\
src/
├── index.ts
├── app.ts
├── routes/
│   ├── userRoutes.ts
│   └── healthRoutes.ts
├── controllers/
│   └── userController.ts
├── middleware/
│   └── errorMiddleware.ts
├── models/
│   └── userModel.ts
└── config/
    ├── config.ts
    └── db.ts
tests/
└── user.test.ts
package.json
tsconfig.json
.env.example
Dockerfile
";

const BLUEPRINTS: &[Blueprint] = &[
    Blueprint {
        id: "saas",
        title: "SaaS Starter",
        description: "Next.js marketing site with pricing, dashboard and a billing API route",
        project_type: "nextjs",
        tree: SAAS_TREE,
    },
    Blueprint {
        id: "ecommerce",
        title: "E-commerce Store",
        description: "Next.js storefront with product listing, cart and checkout API",
        project_type: "nextjs",
        tree: ECOMMERCE_TREE,
    },
    Blueprint {
        id: "dashboard",
        title: "Admin Dashboard",
        description: "React + Vite dashboard with sidebar, stats cards and charts",
        project_type: "react",
        tree: DASHBOARD_TREE,
    },
    Blueprint {
        id: "blog",
        title: "Blog",
        description: "Next.js blog with post listing, about page and markdown content",
        project_type: "nextjs",
        tree: BLOG_TREE,
    },
    Blueprint {
        id: "api",
        title: "REST API",
        description: "Express API in TypeScript with routes, controllers and models",
        project_type: "node",
        tree: API_TREE,
    },
];

/// Every built-in blueprint, in display order.
pub fn all() -> &'static [Blueprint] {
    BLUEPRINTS
}

/// Looks up a blueprint by id, ignoring case.
pub fn find(id: &str) -> Option<&'static Blueprint> {
    let id = id.trim();
    BLUEPRINTS.iter().find(|bp| bp.id.eq_ignore_ascii_case(id))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::PluginRegistry;
    use crate::tree::{parse_tree, ParseOptions};

    #[test]
    fn test_every_blueprint_parses_with_default_unit() {
        for bp in all() {
            let root = parse_tree(bp.tree, &ParseOptions::new(bp.id, 4))
                .unwrap_or_else(|e| panic!("blueprint '{}' does not parse: {}", bp.id, e));
            assert!(root.count_files() > 5, "blueprint '{}' is too small", bp.id);
        }
    }

    #[test]
    fn test_project_types_are_registered() {
        let registry = PluginRegistry::with_builtin();
        for bp in all() {
            assert!(
                registry.get(bp.project_type).is_some(),
                "blueprint '{}' uses unknown type '{}'",
                bp.id,
                bp.project_type
            );
        }
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find("SaaS").map(|bp| bp.id), Some("saas"));
        assert_eq!(find(" api ").map(|bp| bp.project_type), Some("node"));
        assert!(find("crm").is_none());
        let ids: Vec<_> = all().iter().map(|bp| bp.id).collect();
        assert_eq!(ids, vec!["saas", "ecommerce", "dashboard", "blog", "api"]);
    }

    #[test]
    fn test_nested_structure_of_saas() {
        let root = parse_tree(SAAS_TREE, &ParseOptions::new("saas", 4)).expect("valid");
        assert!(root.find("app/api/billing/route.ts").is_some());
        assert!(root.find("components/ui/Card.tsx").is_some());
        assert!(root.find("public").map(|n| n.is_folder()).unwrap_or(false));
    }
}
