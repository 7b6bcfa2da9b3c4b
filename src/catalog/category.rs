use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Ppve,
    Additional,
    PermisAmenager,
}

impl Category {
    /// Order in which sections are listed on the overview screen.
    pub fn display_order() -> [Category; 3] {
        [Category::Ppve, Category::PermisAmenager, Category::Additional]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ppve => "ppve",
            Category::Additional => "additional",
            Category::PermisAmenager => "permis-amenager",
        }
    }

    pub fn section_title(&self) -> &'static str {
        match self {
            Category::Ppve => "Documents PPVE",
            Category::Additional => "Documents Complémentaires",
            Category::PermisAmenager => "Demande de Permis d'aménager",
        }
    }

    pub fn section_subtitle(&self) -> &'static str {
        match self {
            Category::Ppve => "Pièces Jointes aux Consultations des Parties Prenantes Externes",
            Category::Additional => "Dossiers administratifs et études environnementales",
            Category::PermisAmenager => "Dossier administratif de demande de permis d'aménager",
        }
    }

    /// The complementary documents section is always expanded.
    pub fn is_collapsible(&self) -> bool {
        !matches!(self, Category::Additional)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
