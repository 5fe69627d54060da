//! State

use std::sync::Arc;

use foodio_app::{
    context::AppContext,
    domain::{carts::CartsService, foods::FoodsService},
};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) foods: Arc<dyn FoodsService>,
    pub(crate) carts: Arc<dyn CartsService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(foods: Arc<dyn FoodsService>, carts: Arc<dyn CartsService>) -> Self {
        Self { foods, carts }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app.foods, app.carts))
    }
}
