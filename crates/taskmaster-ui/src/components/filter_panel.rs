use chrono::NaiveDate;
use taskmaster_core::filter::parse_date_input;
use taskmaster_core::{
  StatusFilter,
  TaskFilters
};
use taskmaster_shared::TaskPriority;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
  pub filters:            TaskFilters,
  pub on_priority_change:
    Callback<Option<TaskPriority>>,
  pub on_status_change:
    Callback<StatusFilter>,
  pub on_date_change:
    Callback<Option<NaiveDate>>,
  pub on_clear:           Callback<MouseEvent>
}

#[function_component(FilterPanel)]
pub fn filter_panel(
  props: &FilterPanelProps
) -> Html {
  let priority_value = props
    .filters
    .priority
    .map(TaskPriority::as_key)
    .unwrap_or_default();
  let status_value =
    match props.filters.status {
      | StatusFilter::All => "",
      | other => other.as_key()
    };
  let date_value = props
    .filters
    .due_date
    .map(|date| {
      date.format("%Y-%m-%d").to_string()
    })
    .unwrap_or_default();

  let on_priority = {
    let cb =
      props.on_priority_change.clone();
    Callback::from(move |e: web_sys::Event| {
      let select: web_sys::HtmlSelectElement =
        e.target_unchecked_into();
      cb.emit(TaskPriority::from_key(
        &select.value()
      ));
    })
  };
  let on_status = {
    let cb = props.on_status_change.clone();
    Callback::from(move |e: web_sys::Event| {
      let select: web_sys::HtmlSelectElement =
        e.target_unchecked_into();
      cb.emit(StatusFilter::from_key(
        &select.value()
      ));
    })
  };
  let on_date = {
    let cb = props.on_date_change.clone();
    Callback::from(move |e: web_sys::Event| {
      let input: web_sys::HtmlInputElement =
        e.target_unchecked_into();
      cb.emit(parse_date_input(
        &input.value()
      ));
    })
  };

  html! {
      <div class="panel filter-section">
          <div class="details">
              <div class="field">
                  <label>{ "Priority" }</label>
                  <select id="priorityFilter" value={priority_value} onchange={on_priority}>
                      <option value="" selected={priority_value.is_empty()}>{ "All Priorities" }</option>
                      {
                          for TaskPriority::ALL.into_iter().map(|priority| html! {
                              <option
                                  value={priority.as_key()}
                                  selected={priority_value == priority.as_key()}
                              >
                                  { taskmaster_core::view::priority_label(priority) }
                              </option>
                          })
                      }
                  </select>
              </div>
              <div class="field">
                  <label>{ "Status" }</label>
                  <select id="statusFilter" value={status_value} onchange={on_status}>
                      <option value="" selected={status_value.is_empty()}>{ "Any Status" }</option>
                      <option value="pending" selected={status_value == "pending"}>{ "Pending" }</option>
                      <option value="completed" selected={status_value == "completed"}>{ "Completed" }</option>
                  </select>
              </div>
              <div class="field">
                  <label>{ "Due Date" }</label>
                  <input id="dateFilter" type="date" value={date_value} onchange={on_date} />
              </div>
              <div class="actions">
                  <button class="btn" id="clearFilters" onclick={props.on_clear.clone()}>
                      { "Clear Filters" }
                  </button>
              </div>
          </div>
      </div>
  }
}
