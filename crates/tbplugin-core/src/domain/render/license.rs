//! `LICENSE.txt` bodies.
//!
//! The texts live in `licenses/` at the crate root and are compiled in.
//! Each carries `{{YEAR}}`, `{{AUTHOR}}`, `{{EMAIL}}` or `{{PACKAGE}}`
//! placeholders that [`RenderContext::substitute`] fills in.

use super::RenderContext;
use crate::domain::value_objects::LicenseKind;

const WTFPL: &str = include_str!("../../../licenses/wtfpl.txt");
const MIT: &str = include_str!("../../../licenses/mit.txt");
const APACHE_2_0: &str = include_str!("../../../licenses/apache-2.0.txt");
const BSD_3_CLAUSE: &str = include_str!("../../../licenses/bsd-3-clause.txt");
const GPL_3_0: &str = include_str!("../../../licenses/gpl-3.0.txt");

/// Unsubstituted body for a license kind.
pub const fn template(kind: LicenseKind) -> &'static str {
    match kind {
        LicenseKind::Wtfpl => WTFPL,
        LicenseKind::Mit => MIT,
        LicenseKind::Apache2 => APACHE_2_0,
        LicenseKind::Bsd3Clause => BSD_3_CLAUSE,
        LicenseKind::Gpl3 => GPL_3_0,
    }
}

pub fn render(kind: LicenseKind, ctx: &RenderContext) -> String {
    ctx.substitute(template(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{options::ResolvedOptions, render::test_context};

    fn ctx() -> RenderContext {
        test_context(
            "my-lang",
            ResolvedOptions {
                author: "Ada Lovelace".into(),
                email: "ada@example.com".into(),
                ..ResolvedOptions::default()
            },
        )
    }

    #[test]
    fn every_license_is_stamped_with_year_and_author() {
        for kind in LicenseKind::ALL {
            let out = render(kind, &ctx());
            let stamped = out
                .lines()
                .any(|l| l.contains("Copyright") && l.contains("2026") && l.contains("Ada Lovelace"));

            assert!(stamped, "{kind}");
            assert!(!out.contains("{{"), "{kind} left a placeholder");
        }
    }

    #[test]
    fn wtfpl_matches_known_text() {
        let out = render(LicenseKind::Wtfpl, &ctx());
        assert!(out.starts_with("DO WHAT THE FUCK YOU WANT TO PUBLIC LICENSE\nVersion 2, December 2004\n"));
        assert!(out.contains("Copyright (C) 2026 Ada Lovelace <ada@example.com>"));
        assert!(out.ends_with("0. You just DO WHAT THE FUCK YOU WANT TO.\n"));
    }

    #[test]
    fn mit_has_permission_notice() {
        let out = render(LicenseKind::Mit, &ctx());
        assert!(out.starts_with("The MIT License (MIT)\n"));
        assert!(out.contains("Copyright (c) 2026 Ada Lovelace"));
        assert!(out.contains("Permission is hereby granted, free of charge"));
    }

    #[test]
    fn gpl_has_preamble_then_notice_block() {
        let out = render(LicenseKind::Gpl3, &ctx());
        let preamble = out.find("Preamble").unwrap();
        let notice = out.find("    textbringer-my-lang\n").unwrap();

        assert!(out.contains("GNU GENERAL PUBLIC LICENSE"));
        assert!(preamble < notice);
        assert!(out.contains("Copyright (C) 2026  Ada Lovelace <ada@example.com>"));
    }

    #[test]
    fn gpl_and_apache_ship_complete_terms() {
        let gpl = render(LicenseKind::Gpl3, &ctx());
        assert!(gpl.contains("  15. Disclaimer of Warranty."));
        assert!(gpl.contains("END OF TERMS AND CONDITIONS"));
        assert!(gpl.contains("    textbringer-my-lang  Copyright (C) 2026  Ada Lovelace"));

        let apache = render(LicenseKind::Apache2, &ctx());
        assert!(apache.starts_with("                                 Apache License\n"));
        assert!(apache.contains("TERMS AND CONDITIONS FOR USE, REPRODUCTION, AND DISTRIBUTION"));
        assert!(apache.contains("9. Accepting Warranty or Additional Liability."));
        assert!(apache.contains("   Copyright 2026 Ada Lovelace\n"));
    }

    #[test]
    fn blank_identity_does_not_fail() {
        let ctx = test_context("x", ResolvedOptions::default());
        for kind in LicenseKind::ALL {
            assert!(!render(kind, &ctx).is_empty());
        }
    }
}
