use yew::prelude::*;

use super::content::{self, Project};

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let hovered = use_state_eq(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let project = props.project;

    html! {
        <div class="project-card" onmouseenter={onmouseenter} onmouseleave={onmouseleave}>
            <div class="project-image">
                <img class={classes!((*hovered).then_some("scale"))} src={project.image} alt={project.title} loading="lazy" />
                <div class="project-overlay">
                    <div class="project-links">
                        <a href={project.demo_url} class="project-link" target="_blank" rel="noopener noreferrer" aria-label="Live demo">
                            <i class="fas fa-external-link-alt"></i>
                        </a>
                        <a href={project.source_url} class="project-link" target="_blank" rel="noopener noreferrer" aria-label="Source code">
                            <i class="fab fa-github"></i>
                        </a>
                    </div>
                </div>
            </div>
            <div class="project-content">
                <h3 class="project-title">{ project.title }</h3>
                <p class="project-description">{ project.description }</p>
                <div class="project-tech">
                    { for project.tags.iter().map(|tag| html! { <span class="tech-tag">{ *tag }</span> }) }
                </div>
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <section id="projects" class="projects">
            <div class="container">
                <h2 class="section-title">{ "Featured Projects" }</h2>
                <div class="projects-grid">
                    { for content::PROJECTS.iter().map(|project| html! { <ProjectCard project={project} /> }) }
                </div>
            </div>
        </section>
    }
}
