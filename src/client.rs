//! Assembly of the full client stack.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::entities::{Banner, BlogPost, Category, Discount, Order, Product, Subcategory};
use crate::http::{HttpExecutor, Transport};
use crate::interceptor::SessionGuard;
use crate::session::{SessionFile, SessionStore, TokenProvider};
use crate::slice::ResourceSlice;
use crate::uploads::ImageUploader;

/// The wired-up admin client: one executor, one session store, one
/// slice per entity screen.
///
/// Slices and the uploader talk through the guarded transport so a 401
/// anywhere forces a logout; the session store itself uses the raw
/// executor so a rejected login cannot clear an existing session.
pub struct AdminClient {
    pub session: SessionStore,
    pub products: ResourceSlice<Product>,
    pub categories: ResourceSlice<Category>,
    pub subcategories: ResourceSlice<Subcategory>,
    pub orders: ResourceSlice<Order>,
    pub discounts: ResourceSlice<Discount>,
    pub banners: ResourceSlice<Banner>,
    pub blog_posts: ResourceSlice<BlogPost>,
    pub uploader: ImageUploader,
}

impl AdminClient {
    pub fn new(config: &ClientConfig) -> Self {
        let executor: Arc<dyn Transport> = Arc::new(HttpExecutor::new(config));

        let storage = config
            .session_path
            .clone()
            .map(SessionFile::new)
            .unwrap_or_else(SessionFile::at_default);
        let session = SessionStore::new(executor.clone(), storage);

        let guarded: Arc<dyn Transport> =
            Arc::new(SessionGuard::new(executor, session.clone()));
        let tokens: Arc<dyn TokenProvider> = Arc::new(session.clone());

        Self {
            products: ResourceSlice::new(guarded.clone(), tokens.clone()),
            categories: ResourceSlice::new(guarded.clone(), tokens.clone()),
            subcategories: ResourceSlice::new(guarded.clone(), tokens.clone()),
            orders: ResourceSlice::new(guarded.clone(), tokens.clone()),
            discounts: ResourceSlice::new(guarded.clone(), tokens.clone()),
            banners: ResourceSlice::new(guarded.clone(), tokens.clone()),
            blog_posts: ResourceSlice::new(guarded.clone(), tokens.clone()),
            uploader: ImageUploader::new(guarded, tokens),
            session,
        }
    }
}
