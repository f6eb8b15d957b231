use yew::prelude::*;
use yew_router::components::Link;

use crate::blog::posts;
use crate::vimeo;
use crate::Route;

#[function_component(Blog)]
pub fn blog() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="blog-list-page">
            <section class="blog-list-hero">
                <h1>{"Storm Blog"}</h1>
                <p>{"Insights, workshops, and updates on stormwater compliance and digital transformation"}</p>
            </section>
            <section class="blog-list-grid">
                {
                    for posts::all().iter().map(|post| {
                        let thumbnail = vimeo::thumbnail_url(post.video_url);
                        html! {
                            <article class="blog-post-preview">
                                <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }}>
                                    {
                                        if let Some(thumb) = thumbnail {
                                            html! {
                                                <div class="blog-preview-media">
                                                    <img src={thumb} alt={post.title} loading="lazy" />
                                                    <span class="blog-preview-play">{"▶"}</span>
                                                    <span class="blog-preview-tag">{"Watch Video"}</span>
                                                </div>
                                            }
                                        } else if let Some(image) = post.images.first() {
                                            html! {
                                                <div class="blog-preview-media">
                                                    <img src={*image} alt={post.title} loading="lazy" />
                                                </div>
                                            }
                                        } else {
                                            // No thumbnail and no images: gradient placeholder,
                                            // never a broken image reference.
                                            html! { <div class="blog-preview-media placeholder"></div> }
                                        }
                                    }
                                    <div class="blog-preview-body">
                                        <span class="blog-date">{ post.date }</span>
                                        <h2>{ post.title }</h2>
                                        <p>{ post.excerpt }</p>
                                        <span class="blog-read-more">{"Read More →"}</span>
                                    </div>
                                </Link<Route>>
                            </article>
                        }
                    })
                }
            </section>
            <style>
                {r#"
                .blog-list-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    background: linear-gradient(135deg, #eef4fb, #ffffff, #eef4fb);
                }
                .blog-list-hero {
                    text-align: center;
                    padding: 6rem 2rem 3rem;
                }
                .blog-list-hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #0e74ba, #38bdf8);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .blog-list-hero p {
                    font-size: 1.2rem;
                    color: #4b5563;
                    max-width: 600px;
                    margin: 0 auto;
                }
                .blog-list-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 2rem;
                    display: grid;
                    gap: 2rem;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                }
                .blog-post-preview {
                    background: #fff;
                    border-radius: 16px;
                    overflow: hidden;
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.08);
                    transition: box-shadow 0.3s ease, transform 0.3s ease;
                }
                .blog-post-preview:hover {
                    transform: translateY(-5px);
                    box-shadow: 0 20px 48px rgba(0, 0, 0, 0.14);
                }
                .blog-post-preview a {
                    text-decoration: none;
                    color: inherit;
                    display: block;
                }
                .blog-preview-media {
                    position: relative;
                    aspect-ratio: 16 / 9;
                    background: linear-gradient(135deg, #0e74ba, #38bdf8);
                }
                .blog-preview-media img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .blog-preview-play {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    width: 64px;
                    height: 64px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.25);
                    backdrop-filter: blur(6px);
                    color: #fff;
                    font-size: 1.4rem;
                }
                .blog-preview-tag {
                    position: absolute;
                    bottom: 1rem;
                    right: 1rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(0, 0, 0, 0.6);
                    color: #fff;
                    font-size: 0.8rem;
                    font-weight: 600;
                }
                .blog-preview-body {
                    padding: 1.5rem;
                }
                .blog-date {
                    font-size: 0.85rem;
                    color: #6b7280;
                }
                .blog-preview-body h2 {
                    font-size: 1.4rem;
                    color: #111827;
                    margin: 0.5rem 0 0.75rem;
                }
                .blog-preview-body p {
                    color: #4b5563;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }
                .blog-read-more {
                    color: #0e74ba;
                    font-weight: 600;
                }
                @media (max-width: 768px) {
                    .blog-list-hero h1 {
                        font-size: 2.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
