use taskmaster_core::Statistics;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct StatsPanelProps {
  pub stats: Statistics
}

#[function_component(StatsPanel)]
pub fn stats_panel(
  props: &StatsPanelProps
) -> Html {
  let card = |id: &str,
              label: &str,
              value: usize| {
    html! {
        <div class="stat-card">
            <div class="stat-value" id={id.to_string()}>{ value.to_string() }</div>
            <div class="stat-label">{ label.to_string() }</div>
        </div>
    }
  };

  html! {
      <div class="stats">
          { card("totalTasks", "Total", props.stats.total) }
          { card("pendingTasks", "Pending", props.stats.pending) }
          { card("completedTasks", "Completed", props.stats.completed) }
          { card("overdueTasks", "Overdue", props.stats.overdue) }
      </div>
  }
}
