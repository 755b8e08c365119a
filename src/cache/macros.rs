/// Read-through caching over an `Option<&Cache>`.
///
/// With a cache, returns the stored value for `$key` when present; otherwise
/// awaits `$block`, queues the result for storage with `$ttl` seconds to
/// live, and returns it. Without a cache, just awaits `$block`. A failed
/// cache read is logged and treated as a miss; errors from `$block` are
/// propagated with `?`.
///
/// ```rust,ignore
/// let recipe: RecipeRef = cached!(self.cache.as_ref(), CacheKey::Recipe(id), RECIPE_TTL, async {
///     self.fetch(id).await
/// })?;
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        let key = $key;
        match $cache {
            Some(cache) => {
                match cache.get(&key).await {
                    Ok(Some(hit)) => {
                        tracing::debug!(key = %key, "Cache hit");
                        Ok(hit)
                    }
                    miss => {
                        if let Err(e) = miss {
                            tracing::warn!(key = %key, error = %e, "Cache read failed, falling through");
                        }
                        let value = $block.await?;
                        cache.set_in_background(&key, &value, $ttl);
                        Ok(value)
                    }
                }
            }
            None => $block.await,
        }
    }};
}
