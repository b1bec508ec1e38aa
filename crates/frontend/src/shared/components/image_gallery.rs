use crate::shared::icons::icon;
use contracts::shared::media::Media;
use leptos::prelude::*;

/// Index after moving `delta` steps through `len` images, wrapping at both ends
pub fn wrap_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + delta).rem_euclid(len as isize) as usize
}

/// ImageGallery component - main image with thumbnails and prev/next
#[component]
pub fn ImageGallery(
    /// Valid images; falls back to a placeholder when empty
    images: Vec<Media>,
) -> impl IntoView {
    let images = if images.is_empty() {
        vec![Media::placeholder()]
    } else {
        images
    };
    let len = images.len();
    let active = RwSignal::new(0usize);
    let images = StoredValue::new(images);

    let current = move || images.with_value(|imgs| imgs[active.get().min(len - 1)].clone());

    view! {
        <div class="image-gallery">
            <div class="image-gallery__main">
                {move || {
                    let media = current();
                    view! { <img src=media.url alt=media.alt loading="lazy"/> }
                }}
                <Show when=move || { len > 1 }>
                    <button
                        type="button"
                        class="image-gallery__nav image-gallery__nav--prev"
                        aria-label="Previous image"
                        on:click=move |_| active.update(|i| *i = wrap_index(*i, -1, len))
                    >
                        {icon("chevron-left")}
                    </button>
                    <button
                        type="button"
                        class="image-gallery__nav image-gallery__nav--next"
                        aria-label="Next image"
                        on:click=move |_| active.update(|i| *i = wrap_index(*i, 1, len))
                    >
                        {icon("chevron-right")}
                    </button>
                    <span class="image-gallery__counter">
                        {move || format!("{} / {}", active.get() + 1, len)}
                    </span>
                </Show>
            </div>
            <Show when=move || { len > 1 }>
                <div class="image-gallery__thumbs">
                    {images.with_value(|imgs| {
                        imgs.iter()
                            .enumerate()
                            .map(|(i, media)| {
                                let class = move || {
                                    if active.get() == i {
                                        "image-gallery__thumb image-gallery__thumb--active"
                                    } else {
                                        "image-gallery__thumb"
                                    }
                                };
                                view! {
                                    <button type="button" class=class on:click=move |_| active.set(i)>
                                        <img src=media.url.clone() alt=media.alt.clone() loading="lazy"/>
                                    </button>
                                }
                            })
                            .collect_view()
                    })}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(0, -1, 3), 2);
        assert_eq!(wrap_index(2, 1, 3), 0);
        assert_eq!(wrap_index(1, 1, 3), 2);
        assert_eq!(wrap_index(0, 1, 0), 0);
    }
}
