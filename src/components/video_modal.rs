use yew::prelude::*;

use crate::components::overlay::ModalShell;
use crate::vimeo;

#[derive(Properties, PartialEq)]
pub struct VideoModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub video_url: AttrValue,
}

/// Fullscreen Vimeo player overlay. A URL the resolver can't handle degrades
/// to a "Video not available" panel instead of an empty frame.
#[function_component(VideoModal)]
pub fn video_modal(props: &VideoModalProps) -> Html {
    let embed = vimeo::embed_url(&props.video_url);

    html! {
        <ModalShell open={props.open} on_close={props.on_close.clone()} frame_class="video-modal-frame">
            <div class="video-modal-player">
                {
                    if let Some(src) = embed {
                        html! {
                            <iframe
                                src={src}
                                allow="autoplay; fullscreen; picture-in-picture"
                                allowfullscreen=true
                                title="Storm Demo Video"
                            />
                        }
                    } else {
                        html! {
                            <div class="video-modal-missing">
                                <p>{"Video not available"}</p>
                            </div>
                        }
                    }
                }
            </div>
            <style>
                {r#"
                .video-modal-frame {
                    max-width: 1100px;
                }
                .video-modal-player {
                    position: relative;
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    border-radius: 16px;
                    overflow: hidden;
                    background: rgba(0, 0, 0, 0.5);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    box-shadow: 0 24px 64px rgba(0, 0, 0, 0.5);
                }
                .video-modal-player iframe {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    border: none;
                }
                .video-modal-missing {
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-size: 1.1rem;
                }
                "#}
            </style>
        </ModalShell>
    }
}
