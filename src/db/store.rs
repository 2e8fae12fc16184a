//! In-process document store.
//!
//! Collections mirror the original deployment's document database: admins,
//! categories, products and contact forms, each guarded by its own lock. The
//! store owns all serialization; callers hold no lock across requests.

use chrono::Utc;
use parking_lot::RwLock;

use crate::admin::{AdminAccount, AdminStore};
use crate::auth::secret_hash::generate_secret_hash;
use crate::catalog::category::{Category, CategoryCreate};
use crate::catalog::product::{Product, ProductUpdate};
use crate::contact::ContactForm;
use crate::prelude::*;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@goldvakum.com";
pub const DEFAULT_ADMIN_ID: &str = "admin-default";

#[derive(Default)]
pub struct Db {
    admins: RwLock<Vec<AdminAccount>>,
    categories: RwLock<Vec<Category>>,
    products: RwLock<Vec<Product>>,
    contact_forms: RwLock<Vec<ContactForm>>,
}

impl Db {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provisions the bootstrap admin when no account with the default
    /// username exists yet. Idempotent.
    pub fn init(&self) -> Result<()> {
        let mut admins = self.admins.write();
        if admins.iter().any(|a| a.username == DEFAULT_ADMIN_USERNAME) {
            return Ok(());
        }

        admins.push(AdminAccount {
            id: String::from(DEFAULT_ADMIN_ID),
            username: String::from(DEFAULT_ADMIN_USERNAME),
            email: String::from(DEFAULT_ADMIN_EMAIL),
            hashed_password: generate_secret_hash(DEFAULT_ADMIN_PASSWORD)?,
            is_active: true,
            created_at: Utc::now(),
        });
        log::info!("Default admin created: username={DEFAULT_ADMIN_USERNAME}");
        Ok(())
    }

    /// Flips an admin's active flag. Returns false when no such admin exists.
    pub fn set_admin_active(&self, username: &str, is_active: bool) -> bool {
        let mut admins = self.admins.write();
        match admins.iter_mut().find(|a| a.username == username) {
            Some(admin) => {
                admin.is_active = is_active;
                true
            }
            None => false,
        }
    }

    /* Categories */

    pub fn list_categories(&self) -> Vec<Category> {
        self.categories.read().clone()
    }

    pub fn find_category(&self, id: &str) -> Option<Category> {
        self.categories.read().iter().find(|c| c.id == id).cloned()
    }

    pub fn insert_category(&self, category: Category) -> Result<Category> {
        let mut categories = self.categories.write();
        if categories.iter().any(|c| c.slug == category.slug) {
            return Err(Error::CategorySlugTaken);
        }
        categories.push(category.clone());
        Ok(category)
    }

    /// Replaces name, description and slug; id, image and creation time are
    /// kept.
    pub fn update_category(&self, id: &str, update: CategoryCreate) -> Result<Category> {
        let mut categories = self.categories.write();
        let category = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(Error::CategoryNotFound)?;

        category.name = update.name;
        category.description = update.description;
        category.slug = update.slug;
        Ok(category.clone())
    }

    pub fn delete_category(&self, id: &str) -> Result<()> {
        let mut categories = self.categories.write();
        let before = categories.len();
        categories.retain(|c| c.id != id);
        if categories.len() == before {
            return Err(Error::CategoryNotFound);
        }
        Ok(())
    }

    /* Products */

    pub fn list_products(&self, category_id: Option<&str>, is_active: Option<bool>) -> Vec<Product> {
        self.products
            .read()
            .iter()
            .filter(|p| category_id.is_none_or(|id| p.category_id == id))
            .filter(|p| is_active.is_none_or(|active| p.is_active == active))
            .cloned()
            .collect()
    }

    pub fn find_product(&self, id: &str) -> Option<Product> {
        self.products.read().iter().find(|p| p.id == id).cloned()
    }

    pub fn insert_product(&self, product: Product) -> Product {
        self.products.write().push(product.clone());
        product
    }

    pub fn update_product(&self, id: &str, update: ProductUpdate) -> Result<Product> {
        let mut products = self.products.write();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(Error::ProductNotFound)?;

        update.apply(product);
        Ok(product.clone())
    }

    pub fn delete_product(&self, id: &str) -> Result<()> {
        let mut products = self.products.write();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(Error::ProductNotFound);
        }
        Ok(())
    }

    pub fn push_product_image(&self, id: &str, image_url: String) -> Result<Product> {
        let mut products = self.products.write();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(Error::ProductNotFound)?;

        product.images.push(image_url);
        product.updated_at = Utc::now();
        Ok(product.clone())
    }

    pub fn remove_product_image(&self, id: &str, image_index: usize) -> Result<Product> {
        let mut products = self.products.write();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(Error::ProductNotFound)?;

        if image_index >= product.images.len() {
            return Err(Error::ProductImageNotFound);
        }
        product.images.remove(image_index);
        product.updated_at = Utc::now();
        Ok(product.clone())
    }

    /* Contact forms */

    pub fn insert_contact_form(&self, form: ContactForm) -> ContactForm {
        self.contact_forms.write().push(form.clone());
        form
    }

    /// Newest first, optionally filtered by read state.
    pub fn list_contact_forms(&self, is_read: Option<bool>) -> Vec<ContactForm> {
        let mut forms: Vec<ContactForm> = self
            .contact_forms
            .read()
            .iter()
            .filter(|f| is_read.is_none_or(|read| f.is_read == read))
            .cloned()
            .collect();
        forms.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        forms
    }

    pub fn mark_contact_form_read(&self, id: &str) -> Result<()> {
        let mut forms = self.contact_forms.write();
        let form = forms
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(Error::ContactFormNotFound)?;
        form.is_read = true;
        Ok(())
    }

    pub fn delete_contact_form(&self, id: &str) -> Result<()> {
        let mut forms = self.contact_forms.write();
        let before = forms.len();
        forms.retain(|f| f.id != id);
        if forms.len() == before {
            return Err(Error::ContactFormNotFound);
        }
        Ok(())
    }
}

impl AdminStore for Db {
    fn find_by_username(&self, username: &str) -> Option<AdminAccount> {
        self.admins
            .read()
            .iter()
            .find(|a| a.username == username)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::secret_hash::is_secret_valid;
    use crate::catalog::product::ProductCreate;
    use crate::contact::ContactFormCreate;

    fn test_db() -> Db {
        let db = Db::new();
        db.init().unwrap();
        db
    }

    fn category(slug: &str) -> Category {
        CategoryCreate {
            name: Default::default(),
            description: Default::default(),
            slug: String::from(slug),
        }
        .into()
    }

    fn product(category_id: &str) -> Product {
        serde_json::from_value::<ProductCreate>(serde_json::json!({
            "category_id": category_id,
            "name": {"en": "Steam Generator"},
            "description": {"en": "Compact and powerful"},
        }))
        .unwrap()
        .into()
    }

    #[test]
    fn init_creates_default_admin_once() {
        let db = test_db();
        db.init().unwrap();

        let admin = db.find_by_username(DEFAULT_ADMIN_USERNAME).unwrap();
        assert_eq!(admin.id, DEFAULT_ADMIN_ID);
        assert_eq!(admin.email, DEFAULT_ADMIN_EMAIL);
        assert!(admin.is_active);
        assert!(is_secret_valid(DEFAULT_ADMIN_PASSWORD, &admin.hashed_password));
    }

    #[test]
    fn set_admin_active_flips_flag() {
        let db = test_db();
        assert!(db.set_admin_active("admin", false));
        assert!(!db.find_by_username("admin").unwrap().is_active);
        assert!(!db.set_admin_active("ghost", false));
    }

    #[test]
    fn duplicate_category_slug_is_rejected() {
        let db = test_db();
        db.insert_category(category("steam-generator")).unwrap();

        let err = db.insert_category(category("steam-generator")).unwrap_err();
        assert!(matches!(err, Error::CategorySlugTaken));
        assert_eq!(db.list_categories().len(), 1);
    }

    #[test]
    fn product_listing_filters_by_category_and_active() {
        let db = test_db();
        let cat = db.insert_category(category("vacuum-systems")).unwrap();
        let other = db.insert_category(category("industrial-press")).unwrap();

        let active = db.insert_product(product(&cat.id));
        let inactive = db.insert_product(product(&cat.id));
        db.insert_product(product(&other.id));
        db.update_product(
            &inactive.id,
            ProductUpdate {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .unwrap();

        let listed = db.list_products(Some(&cat.id), Some(true));
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, active.id);

        assert_eq!(db.list_products(Some(&cat.id), Some(false)).len(), 1);
        assert_eq!(db.list_products(None, None).len(), 3);
    }

    #[test]
    fn product_image_index_is_bounds_checked() {
        let db = test_db();
        let cat = db.insert_category(category("steam-generator")).unwrap();
        let prod = db.insert_product(product(&cat.id));

        db.push_product_image(&prod.id, String::from("/api/uploads/a.jpg"))
            .unwrap();
        let err = db.remove_product_image(&prod.id, 1).unwrap_err();
        assert!(matches!(err, Error::ProductImageNotFound));

        let updated = db.remove_product_image(&prod.id, 0).unwrap();
        assert!(updated.images.is_empty());
    }

    #[test]
    fn contact_forms_list_newest_first_with_read_filter() {
        let db = test_db();
        let first: ContactForm = ContactFormCreate {
            name: String::from("Ada"),
            email: String::from("ada@example.com"),
            phone: String::from("+90 555 000 0001"),
            company: None,
            product_id: None,
            message: String::from("Quote please"),
        }
        .into();
        let mut second = first.clone();
        second.id = String::from("later");
        second.created_at = first.created_at + chrono::TimeDelta::seconds(5);

        db.insert_contact_form(first.clone());
        db.insert_contact_form(second);

        let listed = db.list_contact_forms(None);
        assert_eq!(listed[0].id, "later");

        db.mark_contact_form_read(&first.id).unwrap();
        assert_eq!(db.list_contact_forms(Some(false)).len(), 1);
        assert_eq!(db.list_contact_forms(Some(true))[0].id, first.id);
    }
}
