//! Entity catalogue for the admin dashboard.
//!
//! Each entity supplies its serde model, a draft carrying the
//! create/update payload with required-field checks, and the endpoint
//! routes the generic slice machinery needs. Wire field names are the
//! API's camelCase, with Mongo-style `_id` identities.

mod banner;
mod blog;
mod category;
mod discount;
mod order;
mod product;
mod subcategory;

pub use banner::{Banner, BannerDraft};
pub use blog::{BlogPost, BlogPostDraft};
pub use category::{Category, CategoryDraft};
pub use discount::{Discount, DiscountDraft};
pub use order::{Order, OrderItem, OrderStatus, OrderStatusDraft};
pub use product::{ColorVariant, Product, ProductDraft, SizeStock};
pub use subcategory::{Subcategory, SubcategoryDraft};
