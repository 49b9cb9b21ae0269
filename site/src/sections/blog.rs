use leptos::prelude::*;
use leptos::task::spawn_local;

use coverleaf::content::BlogPost;

use crate::client::ActiveClient;

#[component]
pub fn BlogRoll() -> impl IntoView {
    let client = expect_context::<ActiveClient>();
    let (posts, set_posts) = signal(Vec::<BlogPost>::new());
    spawn_local(async move {
        set_posts.set(client.source.blog_posts(&client.id).await);
    });

    view! {
        {move || {
            let posts = posts.get();
            (!posts.is_empty()).then(|| view! {
                <section class="blog">
                    <div class="container">
                        <div class="post-list">
                            {posts
                                .iter()
                                .cloned()
                                .map(|post| {
                                    let href = format!("/blog/{}", post.slug);
                                    view! {
                                        <article class="post">
                                            <div class="post-meta">
                                                {post.tag.map(|tag| view! {
                                                    <span class="post-tag">{tag}</span>
                                                })}
                                                <span class="post-date">{post.date}</span>
                                            </div>
                                            <a href=href class="post-title">{post.title}</a>
                                            <p class="post-excerpt">{post.excerpt}</p>
                                        </article>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </section>
            })
        }}
    }
}
