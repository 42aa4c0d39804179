use yew::prelude::*;
use crate::phases::layout::{arrow_segments, phase_positions, WHEEL_CENTER, WHEEL_RADIUS};
use crate::phases::{ImplementationPlan, Phase, PhaseSelection};

const NODE_RADIUS: f64 = 32.0;

#[derive(Properties, PartialEq)]
pub struct PhaseWheelProps {
    pub plan: ImplementationPlan,
}

#[function_component(PhaseWheel)]
pub fn phase_wheel(props: &PhaseWheelProps) -> Html {
    let selection = use_state(PhaseSelection::default);
    let phases = Phase::ALL;

    let (nodes, arrows) = match (
        phase_positions(phases.len(), WHEEL_CENTER, WHEEL_RADIUS),
        arrow_segments(phases.len(), WHEEL_CENTER, WHEEL_RADIUS),
    ) {
        (Ok(nodes), Ok(arrows)) => (nodes, arrows),
        (Err(err), _) | (_, Err(err)) => {
            log::error!("Cannot lay out phase wheel: {}", err);
            return html! {};
        }
    };

    let details = selection.active().map(|phase| phase.details(&props.plan));

    html! {
        <div class="phase-wheel">
            <svg viewBox="0 0 300 300" class="phase-wheel-svg">
                <defs>
                    <marker id="phase-arrow" viewBox="0 0 10 10" refX="8" refY="5"
                        markerWidth="6" markerHeight="6" orient="auto-start-reverse">
                        <path d="M 0 0 L 10 5 L 0 10 z" fill="#9CA3AF" />
                    </marker>
                </defs>
                {
                    arrows.iter().map(|(from, to)| html! {
                        <line
                            x1={format!("{:.2}", from.x)} y1={format!("{:.2}", from.y)}
                            x2={format!("{:.2}", to.x)} y2={format!("{:.2}", to.y)}
                            stroke="#9CA3AF" stroke-width="2" marker-end="url(#phase-arrow)"
                        />
                    }).collect::<Html>()
                }
                {
                    phases.iter().zip(nodes.iter()).map(|(phase, point)| {
                        let phase = *phase;
                        let onclick = {
                            let selection = selection.clone();
                            Callback::from(move |_: MouseEvent| selection.set(selection.toggle(phase)))
                        };
                        let active = selection.is_active(phase);
                        html! {
                            <g key={phase.key()} class={classes!("phase-node", phase.key(), active.then(|| "active"))} {onclick}>
                                <circle
                                    cx={format!("{:.2}", point.x)} cy={format!("{:.2}", point.y)}
                                    r={NODE_RADIUS.to_string()}
                                    fill={phase.color()}
                                    fill-opacity={if active { "1" } else { "0.8" }}
                                />
                                <text x={format!("{:.2}", point.x)} y={format!("{:.2}", point.y + 6.0)}
                                    text-anchor="middle" font-size="18">
                                    { phase.icon() }
                                </text>
                            </g>
                        }
                    }).collect::<Html>()
                }
            </svg>
            {
                if let Some(details) = details {
                    html! {
                        <div class="phase-details" style={format!("border-color: {}", details.phase.color())}>
                            <h3>{ &details.title }</h3>
                            <p class="phase-summary">{ &details.summary }</p>
                            if let Some(duration) = &details.duration {
                                <p class="phase-duration">{ duration }</p>
                            }
                            <ul>
                                { for details.items.iter().map(|item| html! { <li>{ item }</li> }) }
                            </ul>
                            <p class="phase-next">{ format!("Next: {}", details.phase.next().name()) }</p>
                        </div>
                    }
                } else {
                    html! {
                        <p class="phase-hint">{"Click a phase to see what happens in it."}</p>
                    }
                }
            }
        </div>
    }
}
