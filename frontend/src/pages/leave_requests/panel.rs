use crate::pages::leave_requests::{
    components::{form::LeaveRequestForm, list::LeaveRequestsList, toolbar::RequestsToolbar},
    layout::LeaveRequestsLayout,
    types::ViewMode,
    view_model::LeaveRequestsViewModel,
};
use crate::state::host::use_host_context;
use leptos::*;

#[component]
pub fn LeaveRequestPage() -> impl IntoView {
    let host = use_host_context();
    let vm = LeaveRequestsViewModel::new(&host);
    create_effect(move |_| vm.mount());

    view! {
        <LeaveRequestsLayout dark=host.is_dark_theme greeting=host.user_display_name.clone()>
            <LeaveRequestsView vm=vm />
        </LeaveRequestsLayout>
    }
}

#[component]
pub fn LeaveRequestsView(vm: LeaveRequestsViewModel) -> impl IntoView {
    let on_show_list = Callback::new(move |_| vm.show_list());
    let on_new_request = Callback::new(move |_| vm.start_new());
    let on_select = Callback::new(move |record| vm.select_record(record));
    let on_edit = Callback::new(move |edit| vm.edit(edit));
    let on_submit = Callback::new(move |_| vm.submit());
    let mode = vm.mode();

    view! {
        <RequestsToolbar on_show_list=on_show_list on_new_request=on_new_request />
        {move || match mode.get() {
            ViewMode::List => view! {
                <LeaveRequestsList
                    requests=vm.requests()
                    loading=vm.loading()
                    message=vm.list_message()
                    on_select=on_select
                />
            }
            .into_view(),
            ViewMode::Form => view! {
                <LeaveRequestForm
                    form=vm.form()
                    read_only=vm.read_only()
                    submitting=vm.submitting()
                    message=vm.form_message()
                    on_edit=on_edit
                    on_submit=on_submit
                />
            }
            .into_view(),
        }}
    }
}
