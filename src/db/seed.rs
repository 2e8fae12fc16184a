//! Initial catalog data.
//!
//! Loads the three product lines and a couple of representative products when
//! the store starts empty, so a fresh deployment serves a browsable catalog.

use std::collections::HashMap;

use chrono::Utc;

use crate::catalog::LocalizedText;
use crate::catalog::category::Category;
use crate::catalog::product::{DEFAULT_PRICE, Product};
use crate::db::Db;
use crate::prelude::*;

fn localized(tr: &str, en: &str, ar: &str, ru: &str) -> LocalizedText {
    HashMap::from([
        (String::from("tr"), String::from(tr)),
        (String::from("en"), String::from(en)),
        (String::from("ar"), String::from(ar)),
        (String::from("ru"), String::from(ru)),
    ])
}

fn categories() -> Vec<Category> {
    vec![
        Category {
            id: String::from("cat-steam-generator"),
            name: localized("Buhar Jeneratörü", "Steam Generator", "مولد البخار", "Парогенератор"),
            description: localized(
                "Profesyonel istim makinaları",
                "Professional steam machines",
                "آلات بخار احترافية",
                "Профессиональные паровые машины",
            ),
            slug: String::from("steam-generator"),
            image: None,
            created_at: Utc::now(),
        },
        Category {
            id: String::from("cat-vacuum-systems"),
            name: localized("Vakum Sistemleri", "Vacuum Systems", "أنظمة الفراغ", "Вакуумные системы"),
            description: localized(
                "Masaüstü cila makinaları ve vakum sistemleri",
                "Desktop polishing machines and vacuum systems",
                "آلات تلميع مكتبية وأنظمة فراغ",
                "Настольные полировальные машины и вакуумные системы",
            ),
            slug: String::from("vacuum-systems"),
            image: None,
            created_at: Utc::now(),
        },
        Category {
            id: String::from("cat-industrial-press"),
            name: localized("Endüstriyel Pres", "Industrial Press", "مكبس صناعي", "Промышленный пресс"),
            description: localized(
                "İstim makinası entegre pres sistemleri",
                "Steam machine integrated press systems",
                "أنظمة مكابس متكاملة مع آلة البخار",
                "Прессовые системы с интегрированной паровой машиной",
            ),
            slug: String::from("industrial-press"),
            image: None,
            created_at: Utc::now(),
        },
    ]
}

fn products() -> Vec<Product> {
    let now = Utc::now();
    vec![
        Product {
            id: String::from("prod-gold-35-kw"),
            category_id: String::from("cat-steam-generator"),
            name: localized(
                "GOLD 3.5 KW Buhar Jeneratörü",
                "GOLD 3.5 KW Steam Generator",
                "مولد البخار GOLD 3.5 كيلوواط",
                "Парогенератор GOLD 3.5 кВт",
            ),
            description: localized(
                "Kompakt ve güçlü buhar jeneratörü",
                "Compact and powerful steam generator",
                "مولد بخار مدمج وقوي",
                "Компактный и мощный парогенератор",
            ),
            specs: HashMap::from([
                (String::from("power"), String::from("3.5 KW")),
                (String::from("voltage"), String::from("220V")),
            ]),
            features: HashMap::from([
                (String::from("tr"), vec![String::from("Paslanmaz çelik")]),
                (String::from("en"), vec![String::from("Stainless steel")]),
            ]),
            price: String::from(DEFAULT_PRICE),
            is_active: true,
            images: Vec::new(),
            created_at: now,
            updated_at: now,
        },
        Product {
            id: String::from("prod-talasli-kurutma"),
            category_id: String::from("cat-vacuum-systems"),
            name: localized(
                "Talaşlı Kurutma Makinası",
                "Chip Drying Machine",
                "آلة تجفيف الرقائق",
                "Машина для сушки стружки",
            ),
            description: localized(
                "Yüksek verimli çift çekmeceli kurutma sistemi",
                "High-efficiency double drawer drying system",
                "نظام تجفيف بدرج مزدوج عالي الكفاءة",
                "Высокоэффективная система сушки с двумя ящиками",
            ),
            specs: HashMap::new(),
            features: HashMap::new(),
            price: String::from(DEFAULT_PRICE),
            is_active: true,
            images: Vec::new(),
            created_at: now,
            updated_at: now,
        },
    ]
}

/// Seeds the catalog collections when they are empty. Admin provisioning is
/// handled separately by [`Db::init`].
pub fn seed_catalog(db: &Db) -> Result<()> {
    if !db.list_categories().is_empty() {
        return Ok(());
    }

    let categories = categories();
    let products = products();
    log::info!(
        "Seeding {} categories and {} products",
        categories.len(),
        products.len()
    );
    for category in categories {
        db.insert_category(category)?;
    }
    for product in products {
        db.insert_product(product);
    }
    Ok(())
}
