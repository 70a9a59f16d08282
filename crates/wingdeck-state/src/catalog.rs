// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Curated winget packages offered for one-keystroke adding.
//!
//! The table is static and never consults the search endpoint. A quick-add
//! goes through the exact same create path as a hand-filled form.

use wingdeck_core::AppPayload;

/// One quick-add candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopularPackage {
    pub id: &'static str,
    pub name: &'static str,
}

/// A display grouping of [`PopularPackage`] rows.
#[derive(Debug, Clone, Copy)]
pub struct CatalogSection {
    pub title: &'static str,
    pub packages: &'static [PopularPackage],
}

const fn pkg(id: &'static str, name: &'static str) -> PopularPackage {
    PopularPackage { id, name }
}

/// The curated catalog, in display order.
pub const CATALOG: &[CatalogSection] = &[
    CatalogSection {
        title: "Editors & IDEs",
        packages: &[
            pkg("Microsoft.VisualStudioCode", "Visual Studio Code"),
            pkg("VSCodium.VSCodium", "VSCodium"),
            pkg("JetBrains.Toolbox", "JetBrains Toolbox"),
            pkg("KDE.Kate", "Kate"),
            pkg("Notepad++.Notepad++", "Notepad++"),
        ],
    },
    CatalogSection {
        title: "Browsers",
        packages: &[
            pkg("Google.Chrome", "Google Chrome"),
            pkg("Mozilla.Firefox", "Mozilla Firefox"),
            pkg("Microsoft.Edge", "Microsoft Edge"),
        ],
    },
    CatalogSection {
        title: "Developer tooling",
        packages: &[
            pkg("Git.Git", "Git"),
            pkg("GitHub.cli", "GitHub CLI"),
            pkg("JanDeDobbeleer.OhMyPosh", "Oh My Posh"),
            pkg("Microsoft.PowerShell", "PowerShell 7"),
            pkg("GnuWin32.Make", "GNU Make"),
            pkg("GnuPG.Gpg4win", "Gpg4win"),
        ],
    },
    CatalogSection {
        title: "Package managers & runtimes",
        packages: &[
            pkg("ScoopInstaller.Scoop", "Scoop"),
            pkg("Chocolatey.Chocolatey", "Chocolatey"),
            pkg("OpenJS.NodeJS.LTS", "Node.js LTS"),
            pkg("Python.Python.3.12", "Python 3.12"),
            pkg("GoLang.Go", "Go"),
            pkg("Rustlang.Rustup", "Rust (rustup)"),
            pkg("Oracle.JDK.21", "Java JDK 21"),
        ],
    },
    CatalogSection {
        title: "Containers & cloud",
        packages: &[
            pkg("Docker.DockerDesktop", "Docker Desktop"),
            pkg("Kubernetes.kubectl", "kubectl"),
            pkg("Helm.Helm", "Helm"),
            pkg("Hashicorp.Terraform", "Terraform"),
            pkg("Microsoft.AzureCLI", "Azure CLI"),
            pkg("Amazon.AWSToolsforPowerShell", "AWS Tools for PowerShell"),
            pkg("Google.CloudSDK", "Google Cloud SDK"),
        ],
    },
    CatalogSection {
        title: "Databases & tools",
        packages: &[
            pkg("PostgreSQL.PostgreSQL", "PostgreSQL"),
            pkg("MongoDB.Compass.Full", "MongoDB Compass"),
            pkg("DBeaver.DBeaver", "DBeaver"),
            pkg("HeidiSQL.HeidiSQL", "HeidiSQL"),
        ],
    },
    CatalogSection {
        title: "APIs & testing",
        packages: &[
            pkg("Postman.Postman", "Postman"),
            pkg("Insomnia.Insomnia", "Insomnia"),
        ],
    },
    CatalogSection {
        title: "Utilities",
        packages: &[
            pkg("7zip.7zip", "7-Zip"),
            pkg("VideoLAN.VLC", "VLC Media Player"),
            pkg("Microsoft.PowerToys", "PowerToys"),
            pkg("WinSCP.WinSCP", "WinSCP"),
            pkg("PuTTY.PuTTY", "PuTTY"),
            pkg("Microsoft.Sysinternals", "Sysinternals Suite"),
        ],
    },
];

/// Total number of packages across all sections.
pub fn package_count() -> usize {
    CATALOG.iter().map(|s| s.packages.len()).sum()
}

/// Looks up a package by its zero-based position across the whole catalog,
/// counting through the sections in display order.
pub fn package_at(index: usize) -> Option<&'static PopularPackage> {
    let mut remaining = index;
    for section in CATALOG {
        if remaining < section.packages.len() {
            return Some(&section.packages[remaining]);
        }
        remaining -= section.packages.len();
    }
    None
}

/// The payload a quick-add submits through the normal create path.
pub fn quick_add_payload(package: &PopularPackage) -> AppPayload {
    AppPayload {
        name: package.name.to_string(),
        winget_id: Some(package.id.to_string()),
        download_url: None,
        args: None,
    }
}
