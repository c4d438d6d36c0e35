pub mod service;

mod follow;
mod routine;
mod routine_like;
mod scrap;
mod user;

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QuerySelect, Select};

use crate::types::page::{PageRequest, Slice};

/// Fetch one row past the requested size so `has_next` comes out of the same
/// query instead of a separate count.
pub(crate) async fn fetch_slice<E, C>(
    select: Select<E>,
    page: &PageRequest,
    db: &C,
) -> Result<Slice<E::Model>, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let mut items = select
        .limit(page.size + 1)
        .offset(page.offset())
        .all(db)
        .await?;
    let has_next = items.len() as u64 > page.size;
    if has_next {
        items.truncate(page.size as usize);
    }
    Ok(Slice { items, has_next })
}
