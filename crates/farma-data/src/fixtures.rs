//! # Seeded Catalog Fixtures
//!
//! The mock dataset the directory ships with: four Bucharest pharmacies and
//! their product catalogs. Realistic on purpose - Romanian display strings,
//! RON prices in bani, a mix of OTC and RX, several active promotions and
//! one low-stock item, so every view state is reachable from seed data.
//!
//! Records are append-only/static: built here once, never mutated.

use farma_core::{Pharmacy, Product, ProductKind};

/// Builds the seeded pharmacy list.
pub fn pharmacies() -> Vec<Pharmacy> {
    vec![
        pharmacy(
            "1",
            "Farmacia Sf. Maria",
            "https://img.farmalocal.ro/logos/sf-maria.png",
            "Bd. Ion Mihalache 92, Sector 1, București",
            "+40 21 222 1034",
            "contact@sfmaria-farm.ro",
            "Luni-Vineri: 08:00-21:00, Sâmbătă: 09:00-18:00",
            44.4525,
            26.0855,
        ),
        pharmacy(
            "2",
            "HelpFarm Obor",
            "https://img.farmalocal.ro/logos/helpfarm-obor.png",
            "Șos. Colentina 2, Sector 2, București",
            "+40 21 252 7788",
            "obor@helpfarm.ro",
            "Non-stop",
            44.4486,
            26.1260,
        ),
        pharmacy(
            "3",
            "Farmacia Centrală Unirii",
            "https://img.farmalocal.ro/logos/centrala-unirii.png",
            "Bd. Unirii 15, Sector 3, București",
            "+40 21 336 4521",
            "unirii@farmaciacentrala.ro",
            "Luni-Duminică: 07:30-22:00",
            44.4275,
            26.1031,
        ),
        pharmacy(
            "4",
            "BioFarm Militari",
            "https://img.farmalocal.ro/logos/biofarm-militari.png",
            "Bd. Iuliu Maniu 78, Sector 6, București",
            "+40 21 434 9012",
            "militari@biofarm.ro",
            "Luni-Vineri: 08:00-20:00",
            44.4306,
            26.0280,
        ),
    ]
}

/// Builds the seeded product list.
pub fn products() -> Vec<Product> {
    vec![
        // --- Farmacia Sf. Maria ---
        otc(
            "p1",
            "1",
            "Paracetamol 500mg, 20 comprimate",
            Some(1250),
            899,
            120,
            &["paracetamol-1.jpg", "paracetamol-2.jpg"],
        ),
        otc(
            "p2",
            "1",
            "Nurofen Forte 400mg, 24 comprimate",
            None,
            2149,
            64,
            &["nurofen-1.jpg"],
        ),
        otc(
            "p3",
            "1",
            "Vitamina C 1000mg cu măceșe, 30 comprimate",
            Some(2890),
            1999,
            85,
            &["vitamina-c-1.jpg", "vitamina-c-2.jpg", "vitamina-c-3.jpg"],
        ),
        rx("p4", "1", "Augmentin 875mg/125mg, 14 comprimate", None, 4550, 32),
        // --- HelpFarm Obor ---
        otc(
            "p5",
            "2",
            "Parasinus Penta, 12 comprimate",
            Some(1799),
            1349,
            200,
            &["parasinus-1.jpg"],
        ),
        otc(
            "p6",
            "2",
            "Strepsils miere și lămâie, 24 pastile",
            None,
            1680,
            48,
            &["strepsils-1.jpg", "strepsils-2.jpg"],
        ),
        rx("p7", "2", "Aspenter 75mg, 28 comprimate", Some(1150), 950, 90),
        otc(
            "p8",
            "2",
            "Smecta 3g, 10 plicuri",
            None,
            1420,
            15,
            &["smecta-1.jpg"],
        ),
        // --- Farmacia Centrală Unirii ---
        otc(
            "p9",
            "3",
            "Coldrex Maxgrip lămâie, 10 plicuri",
            Some(2550),
            1899,
            110,
            &[
                "coldrex-1.jpg",
                "coldrex-2.jpg",
                "coldrex-3.jpg",
                "coldrex-4.jpg",
            ],
        ),
        otc(
            "p10",
            "3",
            "No-Spa 40mg, 24 comprimate",
            None,
            1575,
            73,
            &["no-spa-1.jpg"],
        ),
        rx("p11", "3", "Tertensif SR 1,5mg, 30 comprimate", None, 2320, 41),
        otc(
            "p12",
            "3",
            "Algocalmin 500mg, 20 comprimate",
            Some(990),
            749,
            160,
            &["algocalmin-1.jpg", "algocalmin-2.jpg"],
        ),
        // --- BioFarm Militari ---
        otc(
            "p13",
            "4",
            "Ibalgin 400mg, 24 comprimate",
            None,
            1265,
            57,
            &["ibalgin-1.jpg"],
        ),
        otc(
            "p14",
            "4",
            "Oscillococcinum, 6 doze",
            Some(3450),
            2799,
            28,
            &["oscillo-1.jpg", "oscillo-2.jpg"],
        ),
    ]
}

// =============================================================================
// Record Constructors
// =============================================================================

#[allow(clippy::too_many_arguments)]
fn pharmacy(
    id: &str,
    name: &str,
    logo_url: &str,
    address: &str,
    phone: &str,
    email: &str,
    schedule: &str,
    latitude: f64,
    longitude: f64,
) -> Pharmacy {
    Pharmacy {
        id: id.to_string(),
        name: name.to_string(),
        logo_url: logo_url.to_string(),
        address: address.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        schedule: schedule.to_string(),
        latitude,
        longitude,
        // Computed per request from the reference location, never seeded
        distance_km: None,
    }
}

fn otc(
    id: &str,
    pharmacy_id: &str,
    name: &str,
    old_price_bani: Option<i64>,
    new_price_bani: i64,
    stock: i64,
    images: &[&str],
) -> Product {
    Product {
        id: id.to_string(),
        pharmacy_id: pharmacy_id.to_string(),
        name: name.to_string(),
        kind: ProductKind::Otc,
        old_price_bani,
        new_price_bani,
        stock,
        prospect_url: format!("https://prospecte.farmalocal.ro/{id}.pdf"),
        images: images
            .iter()
            .map(|img| format!("https://img.farmalocal.ro/produse/{img}"))
            .collect(),
    }
}

/// RX products carry no gallery; the UI renders a fixed placeholder instead.
fn rx(
    id: &str,
    pharmacy_id: &str,
    name: &str,
    old_price_bani: Option<i64>,
    new_price_bani: i64,
    stock: i64,
) -> Product {
    Product {
        id: id.to_string(),
        pharmacy_id: pharmacy_id.to_string(),
        name: name.to_string(),
        kind: ProductKind::Rx,
        old_price_bani,
        new_price_bani,
        stock,
        prospect_url: format!("https://prospecte.farmalocal.ro/{id}.pdf"),
        images: Vec::new(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
