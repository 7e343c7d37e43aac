//! Static page content: the product cards and the navigation sections.

/// A product card. Its recipe lives in the page as `#recipe-{recipe_id}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub image: &'static str,
    pub blurb: &'static str,
    pub recipe_id: &'static str,
}

pub const PRODUCTS: &[Product] = &[
    Product {
        name: "Bolo de Chocolate",
        image: "img/bolo-chocolate.jpg",
        blurb: "Massa fofinha com cobertura cremosa.",
        recipe_id: "bolo-chocolate",
    },
    Product {
        name: "Pão Caseiro",
        image: "img/pao-caseiro.jpg",
        blurb: "Casca crocante e miolo macio.",
        recipe_id: "pao-caseiro",
    },
    Product {
        name: "Brigadeiro Gourmet",
        image: "img/brigadeiro.jpg",
        blurb: "Chocolate belga e granulado crocante.",
        recipe_id: "brigadeiro",
    },
    Product {
        name: "Torta de Limão",
        image: "img/torta-limao.jpg",
        blurb: "Base amanteigada e merengue tostado.",
        recipe_id: "torta-limao",
    },
];

/// Page sections linked from the header, as `(section id, link label)`.
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("inicio", "Início"),
    ("produtos", "Produtos"),
    ("sobre", "Sobre"),
    ("contato", "Contato"),
];

pub fn nav_section_ids() -> Vec<&'static str> {
    NAV_SECTIONS.iter().map(|(id, _)| *id).collect()
}
