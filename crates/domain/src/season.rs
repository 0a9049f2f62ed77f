//! Static season catalog
//!
//! The site ships a fixed list of nine seasons; nothing here is fetched.

/// One season of the show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Season {
    pub id: u32,
    pub title: &'static str,
    /// Short blurb shown on the catalog card
    pub summary: &'static str,
    /// Longer text shown on the season page
    pub description: &'static str,
    /// Asset file name under the site's season image directory
    pub image: &'static str,
}

pub const SEASONS: [Season; 9] = [
    Season {
        id: 1,
        title: "1º Temporada",
        summary: "A primeira temporada de The Office.",
        description: "Descrição da primeira temporada de The Office",
        image: "s1.jpg",
    },
    Season {
        id: 2,
        title: "2º Temporada",
        summary: "A segunda temporada de The Office.",
        description: "Descrição da segunda temporada de The Office",
        image: "s2.jpg",
    },
    Season {
        id: 3,
        title: "3º Temporada",
        summary: "A terceira temporada de The Office.",
        description: "Descrição da terceira temporada de The Office",
        image: "s3.jpg",
    },
    Season {
        id: 4,
        title: "4º Temporada",
        summary: "A quarta temporada de The Office.",
        description: "Descrição da quarta temporada de The Office",
        image: "s4.jpg",
    },
    Season {
        id: 5,
        title: "5º Temporada",
        summary: "A quinta temporada de The Office.",
        description: "Descrição da quinta temporada de The Office",
        image: "s5.jpg",
    },
    Season {
        id: 6,
        title: "6º Temporada",
        summary: "A sexta temporada de The Office.",
        description: "Descrição da sexta temporada de The Office",
        image: "s6.jpg",
    },
    Season {
        id: 7,
        title: "7º Temporada",
        summary: "A sétima temporada de The Office.",
        description: "Descrição da sétima temporada de The Office",
        image: "s7.jpg",
    },
    Season {
        id: 8,
        title: "8º Temporada",
        summary: "A oitava temporada de The Office.",
        description: "Descrição da oitava temporada de The Office",
        image: "s8.jpg",
    },
    Season {
        id: 9,
        title: "9º Temporada",
        summary: "A nona temporada de The Office.",
        description: "Descrição da nona temporada de The Office",
        image: "s9.jpg",
    },
];

/// Looks up a season by its route id.
pub fn season(id: u32) -> Option<&'static Season> {
    SEASONS.iter().find(|s| s.id == id)
}
