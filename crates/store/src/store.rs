use chrono::{NaiveDate, Utc};
use serde::Serialize;

use firemat_catalog::{Category, Product, ProductDraft, RoleRecord};
use firemat_core::{DomainError, DomainResult, Entity, MovementId, ProductId, RoleId, SessionId};
use firemat_ledger::{Movement, MovementDraft, MovementKind, plan_delete, plan_edit, plan_movement};

use crate::seed;

/// Motivo stamped on the synthetic movement of a product alta.
const ALTA_MOTIVO: &str = "Creacion de nuevo producto";

/// Aggregate totals for the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub product_count: usize,
    pub total_stock: i64,
    pub low_stock_count: usize,
}

/// Authoritative session state.
///
/// Constructed per session (or per test) and passed by reference; there is no
/// ambient singleton. Every mutation runs to completion on `&mut self`, so
/// the exclusive borrow is the transaction boundary: a failed call returns
/// before anything is written.
#[derive(Debug)]
pub struct InventoryStore {
    session_id: SessionId,
    products: Vec<Product>,
    categories: Vec<Category>,
    roles: Vec<RoleRecord>,
    movements: Vec<Movement>,
    last_movement_id: i64,
}

impl InventoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self {
            session_id: SessionId::new(),
            products: Vec::new(),
            categories: Vec::new(),
            roles: Vec::new(),
            movements: Vec::new(),
            last_movement_id: 0,
        }
    }

    /// Store pre-loaded with the initial catalog (products, categories, role
    /// records). Seeded products carry their stock directly; they predate the
    /// session, so they have no movement history.
    pub fn seeded() -> Self {
        let store = Self {
            session_id: SessionId::new(),
            products: seed::products(),
            categories: seed::categories(),
            roles: seed::roles(),
            movements: Vec::new(),
            last_movement_id: 0,
        };
        tracing::debug!(
            "Seeded store {} with {} products",
            store.session_id,
            store.products.len()
        );
        store
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    // ── products ────────────────────────────────────────────────────────

    /// Register a new product (alta).
    ///
    /// Assigns the next sequential id and, when `initial_stock > 0`, appends
    /// the synthetic "Alta de producto" movement recording the opening level
    /// (`stock_anterior` 0, `stock_nuevo` = initial stock).
    pub fn create_product(
        &mut self,
        draft: &ProductDraft,
        initial_stock: i64,
        fecha: NaiveDate,
    ) -> DomainResult<ProductId> {
        if initial_stock < 0 {
            return Err(DomainError::validation("stock cannot be negative"));
        }

        let id = self.next_product_id();
        let mut product = Product::new(id, draft, 0)?;

        if initial_stock > 0 {
            let movement_id = self.next_movement_id();
            let alta = MovementDraft::new(MovementKind::AltaDeProducto, initial_stock, fecha)
                .with_motivo(ALTA_MOTIVO)
                .with_documento(product.doc_ref());
            let plan = plan_movement(&product, movement_id, &alta)?;
            product.apply_stock(plan.new_stock);
            self.movements.push(plan.movement);
        }

        tracing::info!("Created product {} ({})", id, product.label());
        self.products.push(product);
        Ok(id)
    }

    /// Replace a product's descriptive metadata. Stock is never touched here;
    /// it only moves through movements.
    pub fn update_product(&mut self, id: ProductId, draft: &ProductDraft) -> DomainResult<()> {
        let idx = position_of(&self.products, id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;
        self.products[idx].update(draft)?;
        tracing::debug!("Updated product {}", id);
        Ok(())
    }

    /// Remove a product unconditionally. Its movement history is retained;
    /// later edits or deletions of those movements simply find no stock left
    /// to adjust.
    pub fn delete_product(&mut self, id: ProductId) -> DomainResult<()> {
        let idx = position_of(&self.products, id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;
        let removed = self.products.remove(idx);
        tracing::info!("Deleted product {} ({})", id, removed.label());
        Ok(())
    }

    // ── categories ──────────────────────────────────────────────────────

    /// Add a category. Names are unique case-insensitively.
    pub fn create_category(&mut self, name: &str) -> DomainResult<()> {
        let category = Category::new(name)?;
        if self.categories.iter().any(|c| c.matches(category.name())) {
            return Err(DomainError::duplicate_name(category.name()));
        }
        tracing::info!("Created category \"{}\"", category.name());
        self.categories.push(category);
        Ok(())
    }

    /// Rename a category. The duplicate check excludes the entry being
    /// renamed; products referencing the old name are NOT rewritten.
    pub fn rename_category(&mut self, old: &str, new: &str) -> DomainResult<()> {
        let idx = self
            .categories
            .iter()
            .position(|c| c.matches(old))
            .ok_or_else(|| DomainError::not_found(format!("category {old}")))?;

        let renamed = Category::new(new)?;
        let duplicate = self
            .categories
            .iter()
            .enumerate()
            .any(|(i, c)| i != idx && c.matches(renamed.name()));
        if duplicate {
            return Err(DomainError::duplicate_name(renamed.name()));
        }

        tracing::info!("Renamed category \"{}\" to \"{}\"", old, renamed.name());
        self.categories[idx] = renamed;
        Ok(())
    }

    /// Remove a category, refusing while any product still references it.
    pub fn delete_category(&mut self, name: &str) -> DomainResult<()> {
        let idx = self
            .categories
            .iter()
            .position(|c| c.matches(name))
            .ok_or_else(|| DomainError::not_found(format!("category {name}")))?;

        let category_name = self.categories[idx].name().to_string();
        if self.products.iter().any(|p| p.category() == category_name) {
            return Err(DomainError::category_in_use(category_name));
        }

        tracing::info!("Deleted category \"{}\"", category_name);
        self.categories.remove(idx);
        Ok(())
    }

    // ── role records ────────────────────────────────────────────────────

    pub fn create_role(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> DomainResult<RoleId> {
        let id = self.next_role_id();
        let role = RoleRecord::new(id, name, description)?;
        tracing::info!("Created role {} ({})", id, role.name());
        self.roles.push(role);
        Ok(id)
    }

    pub fn update_role(
        &mut self,
        id: RoleId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> DomainResult<()> {
        let idx = position_of(&self.roles, id)
            .ok_or_else(|| DomainError::not_found(format!("role {id}")))?;
        self.roles[idx].update(name, description)
    }

    pub fn delete_role(&mut self, id: RoleId) -> DomainResult<()> {
        let idx = position_of(&self.roles, id)
            .ok_or_else(|| DomainError::not_found(format!("role {id}")))?;
        let removed = self.roles.remove(idx);
        tracing::info!("Deleted role {} ({})", id, removed.name());
        Ok(())
    }

    // ── movements ───────────────────────────────────────────────────────

    /// Record a movement against a product, updating the product stock and
    /// appending the ledger entry in one step.
    pub fn record_movement(
        &mut self,
        product_id: ProductId,
        draft: &MovementDraft,
    ) -> DomainResult<MovementId> {
        let idx = position_of(&self.products, product_id)
            .ok_or_else(|| DomainError::not_found(format!("product {product_id}")))?;

        let id = self.next_movement_id();
        let plan = plan_movement(&self.products[idx], id, draft)?;

        tracing::info!(
            "Recorded {} of {} for product {} (stock {} -> {})",
            plan.movement.tipo,
            plan.movement.cantidad,
            product_id,
            plan.movement.stock_anterior,
            plan.new_stock
        );

        self.products[idx].apply_stock(plan.new_stock);
        self.movements.push(plan.movement);
        Ok(id)
    }

    /// Rewrite a historical movement, backing its old delta out of the
    /// product stock and applying the new one.
    pub fn edit_movement(&mut self, id: MovementId, draft: &MovementDraft) -> DomainResult<()> {
        let midx = position_of(&self.movements, id)
            .ok_or_else(|| DomainError::not_found(format!("movement {id}")))?;

        let pidx = position_of(&self.products, self.movements[midx].producto_id);
        let product = pidx.map(|i| &self.products[i]);
        let plan = plan_edit(&self.movements[midx], product, draft)?;

        if let (Some(i), Some(stock)) = (pidx, plan.new_stock) {
            self.products[i].apply_stock(stock);
        }

        tracing::info!(
            "Edited movement {} ({} of {})",
            id,
            plan.movement.tipo,
            plan.movement.cantidad
        );
        self.movements[midx] = plan.movement;
        Ok(())
    }

    /// Remove a movement from the history entirely, reversing its delta from
    /// the product stock. No tombstone is kept.
    pub fn delete_movement(&mut self, id: MovementId) -> DomainResult<()> {
        let midx = position_of(&self.movements, id)
            .ok_or_else(|| DomainError::not_found(format!("movement {id}")))?;

        let pidx = position_of(&self.products, self.movements[midx].producto_id);
        let plan = plan_delete(&self.movements[midx], pidx.map(|i| &self.products[i]));

        if let (Some(i), Some(stock)) = (pidx, plan.new_stock) {
            self.products[i].apply_stock(stock);
        }

        tracing::info!("Deleted movement {}", id);
        self.movements.remove(midx);
        Ok(())
    }

    // ── read projections ────────────────────────────────────────────────

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        position_of(&self.products, id).map(|i| &self.products[i])
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn roles(&self) -> &[RoleRecord] {
        &self.roles
    }

    /// Movements in insertion (creation) order.
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    pub fn movement(&self, id: MovementId) -> Option<&Movement> {
        position_of(&self.movements, id).map(|i| &self.movements[i])
    }

    /// Movements most-recently-created first (descending by id), the display
    /// ordering of the history view.
    pub fn movements_desc(&self) -> Vec<&Movement> {
        let mut all: Vec<&Movement> = self.movements.iter().collect();
        all.sort_by(|a, b| b.id.cmp(&a.id));
        all
    }

    /// Products strictly below their configured minimum.
    pub fn low_stock(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_low_stock()).collect()
    }

    /// How many products reference a category (exact name match, as product
    /// records store the literal name).
    pub fn products_in_category(&self, name: &str) -> usize {
        self.products.iter().filter(|p| p.category() == name).count()
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary {
            product_count: self.products.len(),
            total_stock: self.products.iter().map(|p| p.stock()).sum(),
            low_stock_count: self.products.iter().filter(|p| p.is_low_stock()).count(),
        }
    }

    // ── id assignment ───────────────────────────────────────────────────

    fn next_product_id(&self) -> ProductId {
        ProductId::new(next_sequential(self.products.iter().map(|p| p.id().value())))
    }

    fn next_role_id(&self) -> RoleId {
        RoleId::new(next_sequential(self.roles.iter().map(|r| r.id().value())))
    }

    /// Clock-derived movement id, forced strictly increasing so two
    /// movements in the same millisecond cannot collide.
    fn next_movement_id(&mut self) -> MovementId {
        let id = Utc::now().timestamp_millis().max(self.last_movement_id + 1);
        self.last_movement_id = id;
        MovementId::new(id)
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn position_of<E: Entity>(items: &[E], id: E::Id) -> Option<usize> {
    items.iter().position(|e| e.id() == id)
}

fn next_sequential(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().map_or(1, |max| max + 1)
}
