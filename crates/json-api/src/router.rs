//! App Router

use salvo::Router;

use crate::{carts, foods};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("foods")
                .get(foods::index::handler)
                .push(Router::with_path("{food}").get(foods::get::handler)),
        )
        .push(
            Router::with_path("users/{user}/cart")
                .get(carts::get::handler)
                .push(
                    Router::with_path("items")
                        .post(carts::add_item::handler)
                        .push(
                            Router::with_path("{food}")
                                .put(carts::set_quantity::handler)
                                .delete(carts::delete_line::handler)
                                .push(
                                    Router::with_path("decrement")
                                        .post(carts::remove_one::handler),
                                ),
                        ),
                ),
        )
}
