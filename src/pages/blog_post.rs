use yew::prelude::*;
use yew_router::components::Link;

use crate::blog::blocks::render_blocks;
use crate::blog::posts::{self, BlogPost, PostBody};
use crate::components::video_modal::VideoModal;
use crate::vimeo;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BlogPostPageProps {
    pub slug: AttrValue,
}

/// One blog post, looked up by slug. An unknown slug is a normal outcome and
/// renders the not-found view with a way back, never an error.
#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostPageProps) -> Html {
    {
        let slug = props.slug.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            slug,
        );
    }

    match posts::find(&props.slug) {
        Some(post) => html! { <PostArticle post={PostRef(post)} /> },
        None => html! {
            <div class="post-page">
                <div class="post-not-found">
                    <h1>{"Post Not Found"}</h1>
                    <Link<Route> to={Route::Blog} classes="post-back-link">
                        {"Back to Blog"}
                    </Link<Route>>
                </div>
                <style>
                    {r#"
                    .post-not-found {
                        padding: 10rem 2rem 6rem;
                        text-align: center;
                    }
                    .post-not-found h1 {
                        font-size: 2.5rem;
                        color: #111827;
                        margin-bottom: 1rem;
                    }
                    "#}
                </style>
            </div>
        },
    }
}

/// Static post table entries live for the whole program, so comparing the
/// pointers is enough for prop diffing.
#[derive(Clone, Copy)]
struct PostRef(&'static BlogPost);

impl PartialEq for PostRef {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

#[derive(Properties, PartialEq)]
struct PostArticleProps {
    post: PostRef,
}

#[function_component(PostArticle)]
fn post_article(props: &PostArticleProps) -> Html {
    let post = props.post.0;
    let video_open = use_state(|| false);

    let open_video = {
        let video_open = video_open.clone();
        Callback::from(move |_: MouseEvent| video_open.set(true))
    };
    let close_video = {
        let video_open = video_open.clone();
        Callback::from(move |_| video_open.set(false))
    };

    let featured = if let Some(video_url) = post.video_url {
        let thumbnail = vimeo::thumbnail_url(Some(video_url));
        html! {
            <div class="post-featured-video" onclick={open_video}>
                {
                    if let Some(thumb) = thumbnail {
                        html! { <img src={thumb} alt={post.title} /> }
                    } else {
                        html! {}
                    }
                }
                <span class="post-play-button">{"▶"}</span>
                <span class="post-watch-tag">{"Click to watch featured video"}</span>
            </div>
        }
    } else if let Some(image) = post.images.first() {
        html! {
            <div class="post-featured-image">
                <img src={*image} alt={post.title} />
            </div>
        }
    } else {
        html! {}
    };

    let body = match &post.body {
        PostBody::Plain(text) => text
            .split("\n\n")
            .filter(|p| !p.trim().is_empty())
            .map(|p| html! { <p class="post-paragraph">{ p }</p> })
            .collect::<Html>(),
        PostBody::Blocks(build) => render_blocks(&build()).into_iter().collect::<Html>(),
    };

    html! {
        <div class="post-page">
            <article class="post-article">
                <Link<Route> to={Route::Blog} classes="post-back-link">
                    {"← Back to Blog"}
                </Link<Route>>
                <header class="post-header">
                    <span class="post-date">{ post.date }</span>
                    <h1>{ post.title }</h1>
                </header>
                { featured }
                <div class="post-body">
                    { body }
                    <div class="post-author">
                        <img src="/1743179351400.jpeg" alt="Andrew Teravskis" />
                        <div>
                            <div class="post-author-name">{"Andrew Teravskis"}</div>
                            <div class="post-author-role">{"Founder and CEO, Storm"}</div>
                        </div>
                    </div>
                </div>
            </article>
            {
                if let Some(video_url) = post.video_url {
                    html! {
                        <VideoModal
                            open={*video_open}
                            on_close={close_video}
                            video_url={video_url}
                        />
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .post-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    background: linear-gradient(135deg, #eef4fb, #ffffff, #eef4fb);
                }
                .post-article {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 4rem 2rem 6rem;
                }
                .post-back-link {
                    display: inline-block;
                    color: #0e74ba;
                    font-weight: 600;
                    text-decoration: none;
                    margin-bottom: 2rem;
                }
                .post-back-link:hover {
                    color: #38bdf8;
                }
                .post-header {
                    margin-bottom: 3rem;
                }
                .post-date {
                    font-size: 0.9rem;
                    color: #6b7280;
                }
                .post-header h1 {
                    font-size: 3rem;
                    line-height: 1.15;
                    margin-top: 1rem;
                    background: linear-gradient(45deg, #0e74ba, #38bdf8);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .post-featured-video {
                    position: relative;
                    aspect-ratio: 16 / 9;
                    border-radius: 16px;
                    overflow: hidden;
                    cursor: pointer;
                    margin-bottom: 3rem;
                    background: linear-gradient(135deg, #0e74ba, #38bdf8);
                    box-shadow: 0 24px 64px rgba(0, 0, 0, 0.2);
                    transition: transform 0.3s ease;
                }
                .post-featured-video:hover {
                    transform: scale(1.02);
                }
                .post-featured-video img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .post-play-button {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    width: 88px;
                    height: 88px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.25);
                    backdrop-filter: blur(8px);
                    color: #fff;
                    font-size: 2rem;
                }
                .post-watch-tag {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 1.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(0, 0, 0, 0.6);
                    color: #fff;
                    font-size: 0.85rem;
                    font-weight: 600;
                }
                .post-featured-image img {
                    width: 100%;
                    height: auto;
                    border-radius: 16px;
                    margin-bottom: 3rem;
                    box-shadow: 0 24px 64px rgba(0, 0, 0, 0.2);
                }
                .post-body {
                    background: #fff;
                    border-radius: 16px;
                    padding: 3rem;
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.08);
                }
                .post-paragraph {
                    color: #374151;
                    font-size: 1.1rem;
                    line-height: 1.75;
                    margin-bottom: 1.5rem;
                }
                .post-heading {
                    font-size: 1.9rem;
                    color: #111827;
                    margin: 3rem 0 1.5rem;
                }
                .post-heading:first-child {
                    margin-top: 0;
                }
                .post-list {
                    color: #374151;
                    font-size: 1.1rem;
                    line-height: 1.75;
                    padding-left: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                .post-list li {
                    margin-bottom: 0.5rem;
                }
                .post-image {
                    max-width: 42rem;
                    margin: 3rem auto;
                    border-radius: 12px;
                    overflow: hidden;
                    box-shadow: 0 16px 48px rgba(0, 0, 0, 0.15);
                }
                .post-image-large {
                    max-width: 100%;
                }
                .post-image img {
                    width: 100%;
                    height: auto;
                    display: block;
                }
                .post-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-top: 3rem;
                    padding-top: 2rem;
                    border-top: 1px solid #e5e7eb;
                }
                .post-author img {
                    width: 64px;
                    height: 64px;
                    border-radius: 50%;
                    object-fit: cover;
                }
                .post-author-name {
                    font-weight: 600;
                    font-size: 1.1rem;
                    color: #111827;
                }
                .post-author-role {
                    font-size: 0.9rem;
                    color: #4b5563;
                }
                @media (max-width: 768px) {
                    .post-header h1 {
                        font-size: 2.2rem;
                    }
                    .post-body {
                        padding: 1.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
